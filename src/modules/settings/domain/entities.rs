use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty};
use crate::modules::content::domain::{Entity, Seedable, Validate, ValidationError};

/// Site-wide admin preferences. Field names are camelCase on the wire and
/// in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub site_title: String,
    pub default_dark: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_title: "Portfolio".to_string(),
            default_dark: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub site_title: Option<String>,
    pub default_dark: Option<bool>,
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("siteTitle", &self.site_title)
    }
}

impl Validate for SettingsUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("siteTitle", self.site_title.as_ref())
    }
}

impl Entity for Settings {
    const COLLECTION: &'static str = "settings";
    const LABEL: &'static str = "Settings";
    const CODE: &'static str = "SETTINGS";
    type Update = SettingsUpdate;
}

impl Seedable for Settings {
    fn natural_key(&self) -> Document {
        Document::new()
    }
}
