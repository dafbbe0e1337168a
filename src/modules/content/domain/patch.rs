use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Bson, Document};
use serde::Serialize;

use super::entity::Entity;
use super::record::{
    from_bson_datetime, to_bson_datetime, RecordError, Stored, CREATED_AT_FIELD, ID_FIELD,
    UPDATED_AT_FIELD,
};

const RESERVED_FIELDS: [&str; 3] = [ID_FIELD, CREATED_AT_FIELD, UPDATED_AT_FIELD];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("Update input must encode to a document: {0}")]
    Encode(String),

    #[error("Patched document no longer decodes: {0}")]
    Merge(#[from] RecordError),
}

//
// ──────────────────────────────────────────────────────────
// FieldPatch
// ──────────────────────────────────────────────────────────
// A `$set` payload built from an update shape.
//
// - from_update: filtered merge. Absent (None) and null fields are
//   dropped, so they keep their stored value. This is PATCH, not PUT.
// - replace: every field of the shape is written, nulls included.
//
// Both always stamp `updated_at`; `_id` and `created_at` never make it
// into a patch.
//

#[derive(Debug, Clone, PartialEq)]
pub struct FieldPatch {
    fields: Document,
}

impl FieldPatch {
    pub fn from_update<U: Serialize>(update: &U, now: DateTime<Utc>) -> Result<Self, PatchError> {
        let fields = encode(update)?
            .into_iter()
            .filter(|(key, value)| !matches!(value, Bson::Null) && !is_reserved(key))
            .collect();

        Ok(Self::stamped(fields, now))
    }

    pub fn replace<U: Serialize>(shape: &U, now: DateTime<Utc>) -> Result<Self, PatchError> {
        let fields = encode(shape)?
            .into_iter()
            .filter(|(key, _)| !is_reserved(key))
            .collect();

        Ok(Self::stamped(fields, now))
    }

    fn stamped(mut fields: Document, now: DateTime<Utc>) -> Self {
        fields.insert(UPDATED_AT_FIELD, to_bson_datetime(now));
        Self { fields }
    }

    /// Adds or overrides a content field (e.g. a derived slug).
    pub fn set(&mut self, key: &str, value: impl Into<Bson>) {
        if is_reserved(key) {
            return;
        }
        self.fields.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Bson> {
        self.fields.get(key)
    }

    /// Names of the content fields this patch touches.
    pub fn content_fields(&self) -> Vec<&str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|key| *key != UPDATED_AT_FIELD)
            .collect()
    }

    pub fn has_content(&self) -> bool {
        self.fields.keys().any(|key| key != UPDATED_AT_FIELD)
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.fields
            .get_datetime(UPDATED_AT_FIELD)
            .map(|dt| from_bson_datetime(*dt))
            .unwrap_or_default()
    }

    pub fn as_document(&self) -> &Document {
        &self.fields
    }

    /// Field-level merge onto an already stored document.
    pub fn apply_to(&self, target: &mut Document) {
        for (key, value) in self.fields.iter() {
            target.insert(key.clone(), value.clone());
        }
    }

    /// The document as it would read once this patch is written.
    /// Cross-field rules run against this before anything is stored.
    pub fn preview<T: Entity>(&self, stored: &Stored<T>) -> Result<Stored<T>, PatchError> {
        let mut merged = stored.to_document()?;
        self.apply_to(&mut merged);
        Ok(Stored::from_document(merged)?)
    }

    /// Update operator for the store.
    pub fn into_update(self) -> Document {
        doc! { "$set": self.fields }
    }
}

fn encode<U: Serialize>(value: &U) -> Result<Document, PatchError> {
    bson::to_document(value).map_err(|e| PatchError::Encode(e.to_string()))
}

fn is_reserved(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}
