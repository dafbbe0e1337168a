use chrono::Duration;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::record::timestamp_now;
use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty, require_range};
use crate::modules::content::domain::{Entity, Seedable, Stored, Validate, ValidationError};

//
// ──────────────────────────────────────────────────────────
// A small entity for exercising the generic content machinery
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub score: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
    pub score: Option<i32>,
}

impl Validate for Note {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_range("score", self.score as i64, 0, 10)
    }
}

impl Validate for NoteUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("title", self.title.as_ref())?;
        if let Some(score) = self.score {
            require_range("score", score as i64, 0, 10)?;
        }
        Ok(())
    }
}

impl Entity for Note {
    const COLLECTION: &'static str = "notes";
    const LABEL: &'static str = "Note";
    const CODE: &'static str = "NOTE";
    type Update = NoteUpdate;
}

impl Seedable for Note {
    fn natural_key(&self) -> Document {
        doc! { "title": &self.title }
    }
}

impl Default for Note {
    fn default() -> Self {
        note("Default note")
    }
}

pub fn note(title: &str) -> Note {
    Note {
        title: title.to_string(),
        body: format!("{} body", title),
        tags: vec!["rust".to_string()],
        score: 5,
    }
}

/// A stored document whose timestamps lie in the past, so any later
/// mutation visibly advances `updated_at`.
pub fn backdated<T: Entity>(content: T, minutes_ago: i64) -> Stored<T> {
    Stored::new(content, timestamp_now() - Duration::minutes(minutes_ago))
}
