use mongodb::bson::Document;
use serde::{de::DeserializeOwned, Serialize};

use super::validation::Validate;

/// A flat content document living in its own collection.
///
/// Implementors describe only their content fields; the store identifier and
/// the `created_at`/`updated_at` stamps are carried by [`super::Stored`].
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Logical collection name in the document store.
    const COLLECTION: &'static str;

    /// Human readable name, used in error messages ("Project not found").
    const LABEL: &'static str;

    /// Prefix for API error codes (`PROJECT` => `PROJECT_NOT_FOUND`).
    const CODE: &'static str;

    /// Newest-first ordering field for public listings.
    const PUBLIC_SORT_FIELD: &'static str = "created_at";

    /// Newest-first ordering field for admin listings.
    const ADMIN_SORT_FIELD: &'static str = "updated_at";

    /// Partial-update shape: every field optional.
    type Update: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;
}

/// Entities that ship default content and can be matched by a natural key
/// during seeding.
pub trait Seedable: Entity + Validate {
    /// Equality filter identifying "the same record" across runs.
    /// Singleton collections return an empty filter.
    fn natural_key(&self) -> Document;
}
