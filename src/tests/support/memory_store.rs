use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::modules::content::application::ports::outgoing::{
    ContentRepository, RepositoryError, RepositoryProvider,
};
use crate::modules::content::domain::record::CREATED_AT_FIELD;
use crate::modules::content::domain::{Entity, FieldPatch, ListRequest, SortSpec, Stored};

//
// ──────────────────────────────────────────────────────────
// In-memory document store
// ──────────────────────────────────────────────────────────
// Equality filters, sort documents and limit: exactly what the
// content repositories ask of the real store.
//

#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    unique: Arc<Mutex<HashMap<String, Vec<String>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation on `collection` fails with a database error.
    pub fn fail_collection(&self, collection: &str) {
        self.failing.lock().unwrap().insert(collection.to_string());
    }

    /// Rejects inserts/patches that would duplicate `field` within `collection`.
    pub fn unique_field(&self, collection: &str, field: &str) {
        self.unique
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(field.to_string());
    }

    pub fn insert_stored<T: Entity>(&self, stored: Stored<T>) -> Stored<T> {
        let doc = stored.to_document().unwrap();
        self.collections
            .lock()
            .unwrap()
            .entry(T::COLLECTION.to_string())
            .or_default()
            .push(doc);
        stored
    }

    pub fn count_in(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn repo<T: Entity>(&self) -> MemoryRepository<T> {
        MemoryRepository {
            store: self.clone(),
            _entity: PhantomData,
        }
    }

    fn check_available(&self, collection: &str) -> Result<(), RepositoryError> {
        if self.failing.lock().unwrap().contains(collection) {
            return Err(RepositoryError::DatabaseError(format!(
                "collection '{}' unavailable",
                collection
            )));
        }
        Ok(())
    }

    fn check_unique(
        &self,
        collection: &str,
        docs: &[Document],
        candidate: &Document,
        id: ObjectId,
    ) -> Result<(), RepositoryError> {
        let unique = self.unique.lock().unwrap();
        let Some(fields) = unique.get(collection) else {
            return Ok(());
        };

        for field in fields {
            let Some(value) = candidate.get(field) else {
                continue;
            };
            let clash = docs.iter().any(|doc| {
                doc.get_object_id("_id").ok() != Some(id) && doc.get(field) == Some(value)
            });
            if clash {
                return Err(RepositoryError::DuplicateKey(format!(
                    "E11000 duplicate key error collection: {} index: {}_1",
                    collection, field
                )));
            }
        }
        Ok(())
    }
}

impl RepositoryProvider for MemoryStore {
    fn repository<T: Entity>(&self) -> Arc<dyn ContentRepository<T>> {
        Arc::new(self.repo::<T>())
    }
}

pub struct MemoryRepository<T> {
    store: MemoryStore,
    _entity: PhantomData<fn() -> T>,
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, value)| doc.get(key) == Some(value))
}

fn compare(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    match (a, b) {
        (Some(Bson::String(a)), Some(Bson::String(b))) => a.cmp(b),
        (Some(Bson::DateTime(a)), Some(Bson::DateTime(b))) => a.cmp(b),
        (Some(Bson::Int32(a)), Some(Bson::Int32(b))) => a.cmp(b),
        (Some(Bson::Int64(a)), Some(Bson::Int64(b))) => a.cmp(b),
        (Some(Bson::Double(a)), Some(Bson::Double(b))) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (Some(Bson::Boolean(a)), Some(Bson::Boolean(b))) => a.cmp(b),
        (Some(Bson::ObjectId(a)), Some(Bson::ObjectId(b))) => a.cmp(b),
        // Missing and null sort first, as in the real store.
        (None | Some(Bson::Null), Some(_)) => Ordering::Less,
        (Some(_), None | Some(Bson::Null)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Orders by each key of a `{field: 1 | -1}` sort document in turn.
fn compare_by(a: &Document, b: &Document, sort: &Document) -> Ordering {
    sort.iter()
        .map(|(field, order)| {
            let ordering = compare(a.get(field), b.get(field));
            if order.as_i32() == Some(-1) {
                ordering.reverse()
            } else {
                ordering
            }
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[async_trait]
impl<T: Entity> ContentRepository<T> for MemoryRepository<T> {
    async fn insert(&self, document: Stored<T>) -> Result<Stored<T>, RepositoryError> {
        self.store.check_available(T::COLLECTION)?;
        let doc = document.to_document()?;

        let mut collections = self.store.collections.lock().unwrap();
        let docs = collections.entry(T::COLLECTION.to_string()).or_default();
        self.store
            .check_unique(T::COLLECTION, docs, &doc, document.id)?;
        docs.push(doc);

        Ok(document)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Stored<T>>, RepositoryError> {
        let mut filter = Document::new();
        filter.insert("_id", id);
        self.find_one(filter).await
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Stored<T>>, RepositoryError> {
        self.store.check_available(T::COLLECTION)?;
        let found = self
            .store
            .documents(T::COLLECTION)
            .into_iter()
            .find(|doc| matches(doc, &filter));

        found
            .map(Stored::from_document)
            .transpose()
            .map_err(RepositoryError::from)
    }

    async fn list(&self, request: ListRequest) -> Result<Vec<Stored<T>>, RepositoryError> {
        self.store.check_available(T::COLLECTION)?;
        let mut docs: Vec<Document> = self
            .store
            .documents(T::COLLECTION)
            .into_iter()
            .filter(|doc| matches(doc, &request.filter))
            .collect();

        if let Some(sort) = &request.sort {
            let sort = sort.to_document();
            docs.sort_by(|a, b| compare_by(a, b, &sort));
        }

        docs.into_iter()
            .take(request.limit.max(0) as usize)
            .map(|doc| Stored::from_document(doc).map_err(RepositoryError::from))
            .collect()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.store.check_available(T::COLLECTION)?;
        Ok(self.store.count_in(T::COLLECTION) as u64)
    }

    async fn apply_patch(
        &self,
        id: ObjectId,
        patch: FieldPatch,
    ) -> Result<Option<Stored<T>>, RepositoryError> {
        self.store.check_available(T::COLLECTION)?;

        let mut collections = self.store.collections.lock().unwrap();
        let docs = collections.entry(T::COLLECTION.to_string()).or_default();

        let Some(index) = docs
            .iter()
            .position(|doc| doc.get_object_id("_id").ok() == Some(id))
        else {
            return Ok(None);
        };

        let mut merged = docs[index].clone();
        patch.apply_to(&mut merged);
        self.store.check_unique(T::COLLECTION, docs, &merged, id)?;
        docs[index] = merged.clone();

        Ok(Some(Stored::from_document(merged)?))
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, RepositoryError> {
        self.store.check_available(T::COLLECTION)?;

        let mut collections = self.store.collections.lock().unwrap();
        let docs = collections.entry(T::COLLECTION.to_string()).or_default();
        let before = docs.len();
        docs.retain(|doc| doc.get_object_id("_id").ok() != Some(id));

        Ok(docs.len() < before)
    }

    async fn ensure_one(&self, document: Stored<T>) -> Result<Stored<T>, RepositoryError> {
        self.store.check_available(T::COLLECTION)?;

        let mut collections = self.store.collections.lock().unwrap();
        let docs = collections.entry(T::COLLECTION.to_string()).or_default();

        let oldest = SortSpec::asc(CREATED_AT_FIELD).to_document();
        match docs.iter().min_by(|a, b| compare_by(a, b, &oldest)) {
            Some(existing) => Ok(Stored::from_document(existing.clone())?),
            None => {
                docs.push(document.to_document()?);
                Ok(document)
            }
        }
    }
}
