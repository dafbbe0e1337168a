use chrono::NaiveDate;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty};
use crate::modules::content::domain::{Entity, Seedable, Validate, ValidationError};

/// A work history entry. `type` is free text ("Virtual Internship",
/// "Full-time", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ExperienceUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

fn check_date_order(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => Err(ValidationError::Invalid {
            field: "end_date",
            reason: "must not precede start_date".to_string(),
        }),
        _ => Ok(()),
    }
}

impl Validate for Experience {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("company", &self.company)?;
        check_date_order(self.start_date, self.end_date)
    }
}

/// Only checks what the update carries; an `end_date` alone is checked
/// against the stored `start_date` once merged.
impl Validate for ExperienceUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("title", self.title.as_ref())?;
        non_empty_if_present("company", self.company.as_ref())?;
        match self.start_date {
            Some(start) => check_date_order(start, self.end_date),
            None => Ok(()),
        }
    }
}

impl Entity for Experience {
    const COLLECTION: &'static str = "experiences";
    const LABEL: &'static str = "Experience";
    const CODE: &'static str = "EXPERIENCE";
    const PUBLIC_SORT_FIELD: &'static str = "start_date";
    type Update = ExperienceUpdate;
}

impl Seedable for Experience {
    fn natural_key(&self) -> Document {
        doc! { "company": &self.company, "title": &self.title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::values::calendar_date;
    use crate::modules::experience::domain::defaults::default_experiences;
    use serde_json::json;

    #[test]
    fn kind_travels_as_type() {
        let value = serde_json::to_value(&default_experiences()[0]).unwrap();

        assert_eq!(value["type"], "Virtual Internship");
        assert!(value.get("kind").is_none());
        assert_eq!(value["start_date"], "2024-06-01");
    }

    #[test]
    fn optional_fields_default_on_create() {
        let experience: Experience = serde_json::from_value(json!({
            "title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "type": "Full-time",
            "start_date": "2025-01-01",
            "description": "Building things"
        }))
        .unwrap();

        assert_eq!(experience.end_date, None);
        assert!(!experience.current);
        assert!(experience.achievements.is_empty());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut experience = default_experiences().remove(0);
        experience.end_date = Some(calendar_date(2020, 1, 1));

        assert!(matches!(
            experience.validate(),
            Err(ValidationError::Invalid { field: "end_date", .. })
        ));
    }

    #[test]
    fn update_with_both_dates_reversed_is_rejected_up_front() {
        let update = ExperienceUpdate {
            start_date: Some(calendar_date(2024, 6, 1)),
            end_date: Some(calendar_date(2024, 1, 1)),
            ..Default::default()
        };

        assert!(matches!(
            update.validate(),
            Err(ValidationError::Invalid { field: "end_date", .. })
        ));
    }

    #[test]
    fn update_with_only_end_date_defers_to_the_merged_document() {
        let update = ExperienceUpdate {
            end_date: Some(calendar_date(2020, 1, 1)),
            ..Default::default()
        };

        assert!(update.validate().is_ok());
    }

    #[test]
    fn public_listing_orders_by_start_date() {
        assert_eq!(Experience::PUBLIC_SORT_FIELD, "start_date");
    }
}
