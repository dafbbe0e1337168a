use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty};
use crate::modules::content::domain::{Entity, Seedable, Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Busy,
    Unavailable,
}

/// Owner profile. The collection holds a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    #[serde(default)]
    pub github: Option<String>,
    pub bio: String,
    pub avatar: String,
    pub resume: String,
    #[serde(default)]
    pub status: AvailabilityStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PersonalInfoUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    pub status: Option<AvailabilityStatus>,
}

impl Validate for PersonalInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("title", &self.title)?;
        require_non_empty("email", &self.email)
    }
}

impl Validate for PersonalInfoUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("name", self.name.as_ref())?;
        non_empty_if_present("title", self.title.as_ref())?;
        non_empty_if_present("email", self.email.as_ref())
    }
}

impl Entity for PersonalInfo {
    const COLLECTION: &'static str = "personal_info";
    const LABEL: &'static str = "Personal information";
    const CODE: &'static str = "PERSONAL_INFO";
    type Update = PersonalInfoUpdate;
}

impl Seedable for PersonalInfo {
    fn natural_key(&self) -> Document {
        Document::new()
    }
}
