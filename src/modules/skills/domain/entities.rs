use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty, require_range};
use crate::modules::content::domain::{Entity, Seedable, Validate, ValidationError};

pub const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub category: String,
    pub name: String,
    /// Proficiency, 0-100.
    pub level: u8,
    #[serde(default)]
    pub years_experience: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SkillUpdate {
    pub category: Option<String>,
    pub name: Option<String>,
    pub level: Option<u8>,
    pub years_experience: Option<f32>,
}

fn check_level(level: u8) -> Result<(), ValidationError> {
    require_range("level", level as i64, 0, MAX_SKILL_LEVEL as i64)
}

impl Validate for Skill {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("category", &self.category)?;
        require_non_empty("name", &self.name)?;
        check_level(self.level)
    }
}

impl Validate for SkillUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("category", self.category.as_ref())?;
        non_empty_if_present("name", self.name.as_ref())?;
        if let Some(level) = self.level {
            check_level(level)?;
        }
        Ok(())
    }
}

impl Entity for Skill {
    const COLLECTION: &'static str = "skills";
    const LABEL: &'static str = "Skill";
    const CODE: &'static str = "SKILL";
    type Update = SkillUpdate;
}

impl Seedable for Skill {
    fn natural_key(&self) -> Document {
        doc! { "name": &self.name, "category": &self.category }
    }
}
