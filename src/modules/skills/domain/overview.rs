use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::entities::Skill;

/// Presentation constant for the public skills view; never stored.
pub const SOFT_SKILLS: [&str; 6] = [
    "Problem Solving",
    "Team Collaboration",
    "Critical Thinking",
    "Communication",
    "Leadership",
    "Agile Development",
];

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillLevel {
    pub name: String,
    pub level: u8,
}

/// Skills grouped by category, plus the fixed soft-skill list.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillsOverview {
    pub technical: BTreeMap<String, Vec<SkillLevel>>,
    pub soft: Vec<String>,
}

impl SkillsOverview {
    /// Groups in iteration order: within a category, skills keep the order
    /// they were given in.
    pub fn from_skills<I>(skills: I) -> Self
    where
        I: IntoIterator<Item = Skill>,
    {
        let mut technical: BTreeMap<String, Vec<SkillLevel>> = BTreeMap::new();
        for skill in skills {
            technical.entry(skill.category).or_default().push(SkillLevel {
                name: skill.name,
                level: skill.level,
            });
        }

        Self {
            technical,
            soft: SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
