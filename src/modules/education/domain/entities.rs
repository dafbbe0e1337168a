use chrono::NaiveDate;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty};
use crate::modules::content::domain::{Entity, Seedable, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    /// Free text, e.g. "8.5/10".
    #[serde(default)]
    pub gpa: Option<String>,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EducationUpdate {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: Option<bool>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
}

impl Validate for Education {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("degree", &self.degree)?;
        require_non_empty("institution", &self.institution)
    }
}

impl Validate for EducationUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("degree", self.degree.as_ref())?;
        non_empty_if_present("institution", self.institution.as_ref())
    }
}

impl Entity for Education {
    const COLLECTION: &'static str = "education";
    const LABEL: &'static str = "Education";
    const CODE: &'static str = "EDUCATION";
    const PUBLIC_SORT_FIELD: &'static str = "start_date";
    type Update = EducationUpdate;
}

impl Seedable for Education {
    fn natural_key(&self) -> Document {
        doc! { "degree": &self.degree, "institution": &self.institution }
    }
}
