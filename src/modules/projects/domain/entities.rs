use chrono::NaiveDate;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty};
use crate::modules::content::domain::{
    Entity, ListRequest, Seedable, Validate, ValidationError,
};

pub const FEATURED_PROJECTS_LIMIT: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Validate for Project {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("description", &self.description)?;
        require_non_empty("category", &self.category)
    }
}

impl Validate for ProjectUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("title", self.title.as_ref())?;
        non_empty_if_present("description", self.description.as_ref())?;
        non_empty_if_present("category", self.category.as_ref())
    }
}

impl Entity for Project {
    const COLLECTION: &'static str = "projects";
    const LABEL: &'static str = "Project";
    const CODE: &'static str = "PROJECT";
    type Update = ProjectUpdate;
}

impl Seedable for Project {
    fn natural_key(&self) -> Document {
        doc! { "title": &self.title }
    }
}

/// Completed projects, newest first.
pub fn featured_projects() -> ListRequest {
    ListRequest::public::<Project>()
        .matching(doc! { "status": ProjectStatus::Completed.as_str() })
        .limit(FEATURED_PROJECTS_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::SortSpec;
    use serde_json::json;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(serde_json::to_value(ProjectStatus::InProgress).unwrap(), json!("in-progress"));
        assert!(serde_json::from_value::<ProjectStatus>(json!("abandoned")).is_err());
    }

    #[test]
    fn dates_are_iso_calendar_strings() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(serde_json::to_value(date).unwrap(), json!("2024-04-01"));
    }

    #[test]
    fn featured_request_filters_completed_and_caps_at_six() {
        let request = featured_projects();

        assert_eq!(request.filter, doc! { "status": "completed" });
        assert_eq!(request.limit, 6);
        assert_eq!(request.sort, Some(SortSpec::desc("created_at")));
    }
}
