pub mod defaults;
pub mod entities;
pub mod overview;

pub use entities::{Skill, SkillUpdate, MAX_SKILL_LEVEL};
pub use overview::{SkillLevel, SkillsOverview, SOFT_SKILLS};
