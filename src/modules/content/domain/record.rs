use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::{self, oid::ObjectId, Document};
use serde::Serialize;

use super::entity::Entity;

pub const ID_FIELD: &str = "_id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Document is missing field '{0}'")]
    MissingField(&'static str),

    #[error("Failed to encode document: {0}")]
    Encode(String),

    #[error("Failed to decode document: {0}")]
    Decode(String),
}

/// Current time at the precision the store keeps (milliseconds).
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub fn to_bson_datetime(dt: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

pub fn from_bson_datetime(dt: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

//
// ──────────────────────────────────────────────────────────
// Stored document
// ──────────────────────────────────────────────────────────
//

/// A content document as persisted: store id, content fields, timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<T> {
    pub id: ObjectId,
    pub content: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T: Entity> Stored<T> {
    /// Fresh document: new id, both timestamps set to `now`.
    pub fn new(content: T, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(3);
        Self {
            id: ObjectId::new(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_document(&self) -> Result<Document, RecordError> {
        let mut doc =
            bson::to_document(&self.content).map_err(|e| RecordError::Encode(e.to_string()))?;

        doc.insert(ID_FIELD, self.id);
        doc.insert(CREATED_AT_FIELD, to_bson_datetime(self.created_at));
        doc.insert(UPDATED_AT_FIELD, to_bson_datetime(self.updated_at));

        Ok(doc)
    }

    /// Documents written by older seeders may lack timestamps; `created_at`
    /// then falls back to the id's embedded time and `updated_at` to
    /// `created_at`.
    pub fn from_document(mut doc: Document) -> Result<Self, RecordError> {
        let id = doc
            .get_object_id(ID_FIELD)
            .map_err(|_| RecordError::MissingField(ID_FIELD))?;

        let created_at = doc
            .get_datetime(CREATED_AT_FIELD)
            .ok()
            .copied()
            .map(from_bson_datetime)
            .unwrap_or_else(|| from_bson_datetime(id.timestamp()));

        let updated_at = doc
            .get_datetime(UPDATED_AT_FIELD)
            .ok()
            .copied()
            .map(from_bson_datetime)
            .unwrap_or(created_at);

        doc.remove(ID_FIELD);
        doc.remove(CREATED_AT_FIELD);
        doc.remove(UPDATED_AT_FIELD);

        let content = bson::from_document(doc).map_err(|e| RecordError::Decode(e.to_string()))?;

        Ok(Self {
            id,
            content,
            created_at,
            updated_at,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// API record
// ──────────────────────────────────────────────────────────
//

/// Response shape: the identifier is mirrored as `_id` and `id`.
#[derive(Debug, Clone, Serialize)]
pub struct Record<T> {
    #[serde(rename = "_id")]
    pub raw_id: String,
    pub id: String,
    #[serde(flatten)]
    pub content: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T> From<Stored<T>> for Record<T> {
    fn from(stored: Stored<T>) -> Self {
        let id = stored.id.to_hex();
        Self {
            raw_id: id.clone(),
            id,
            content: stored.content,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}
