use chrono::NaiveDate;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty};
use crate::modules::content::domain::{Entity, Seedable, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub credential_id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CertificationUpdate {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl Validate for Certification {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("issuer", &self.issuer)
    }
}

impl Validate for CertificationUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("title", self.title.as_ref())?;
        non_empty_if_present("issuer", self.issuer.as_ref())
    }
}

impl Entity for Certification {
    const COLLECTION: &'static str = "certifications";
    const LABEL: &'static str = "Certification";
    const CODE: &'static str = "CERTIFICATION";
    const PUBLIC_SORT_FIELD: &'static str = "date";
    type Update = CertificationUpdate;
}

impl Seedable for Certification {
    fn natural_key(&self) -> Document {
        doc! { "title": &self.title, "issuer": &self.issuer }
    }
}
