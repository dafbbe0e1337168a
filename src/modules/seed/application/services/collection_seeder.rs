use async_trait::async_trait;
use tracing::{debug, info};

use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::domain::record::timestamp_now;
use crate::modules::content::domain::{FieldPatch, Seedable, Stored};
use crate::modules::seed::application::ports::SeedTask;
use crate::modules::seed::domain::{SeedError, SeedOutcome, SeedPolicy};

//
// ──────────────────────────────────────────────────────────
// One collection, one policy
// ──────────────────────────────────────────────────────────
//

pub struct CollectionSeeder<T, R>
where
    T: Seedable,
    R: ContentRepository<T>,
{
    repository: R,
    defaults: Vec<T>,
    policy: SeedPolicy,
}

impl<T, R> CollectionSeeder<T, R>
where
    T: Seedable,
    R: ContentRepository<T>,
{
    pub fn new(repository: R, defaults: Vec<T>, policy: SeedPolicy) -> Self {
        Self {
            repository,
            defaults,
            policy,
        }
    }

    async fn fill_if_empty(&self) -> Result<SeedOutcome, SeedError> {
        let existing = self.repository.count().await?;
        if existing > 0 {
            debug!(
                "{} already holds {} document(s), leaving it alone",
                T::COLLECTION,
                existing
            );
            return Ok(SeedOutcome::Skipped { existing });
        }

        let now = timestamp_now();
        for record in &self.defaults {
            self.repository
                .insert(Stored::new(record.clone(), now))
                .await?;
        }

        Ok(SeedOutcome::Applied {
            inserted: self.defaults.len(),
            updated: 0,
        })
    }

    async fn upsert_by_key(&self) -> Result<SeedOutcome, SeedError> {
        let mut inserted = 0;
        let mut updated = 0;

        for record in &self.defaults {
            let now = timestamp_now();

            match self.repository.find_one(record.natural_key()).await? {
                Some(existing) => {
                    let patch = FieldPatch::from_update(record, now)?;
                    self.repository.apply_patch(existing.id, patch).await?;
                    updated += 1;
                }
                None => {
                    self.repository
                        .insert(Stored::new(record.clone(), now))
                        .await?;
                    inserted += 1;
                }
            }
        }

        Ok(SeedOutcome::Applied { inserted, updated })
    }
}

#[async_trait]
impl<T, R> SeedTask for CollectionSeeder<T, R>
where
    T: Seedable,
    R: ContentRepository<T>,
{
    fn collection(&self) -> &'static str {
        T::COLLECTION
    }

    fn policy(&self) -> SeedPolicy {
        self.policy
    }

    async fn seed(&self) -> Result<SeedOutcome, SeedError> {
        // Broken defaults are a programming error; catch them before any write.
        for record in &self.defaults {
            record.validate()?;
        }

        let outcome = match self.policy {
            SeedPolicy::FillIfEmpty => self.fill_if_empty().await?,
            SeedPolicy::UpsertByKey => self.upsert_by_key().await?,
        };

        if let SeedOutcome::Applied { inserted, updated } = outcome {
            info!(
                "Seeded {} ({}): {} inserted, {} updated",
                T::COLLECTION,
                self.policy,
                inserted,
                updated
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::ValidationError;
    use crate::tests::support::content_fixtures::{backdated, note, Note};
    use crate::tests::support::memory_store::MemoryStore;

    fn defaults() -> Vec<Note> {
        vec![note("alpha"), note("beta"), note("gamma")]
    }

    #[tokio::test]
    async fn fill_if_empty_twice_yields_the_default_count_both_times() {
        let store = MemoryStore::new();
        let seeder = CollectionSeeder::new(store.repo::<Note>(), defaults(), SeedPolicy::FillIfEmpty);

        let first = seeder.seed().await.unwrap();
        assert_eq!(first, SeedOutcome::Applied { inserted: 3, updated: 0 });
        assert_eq!(store.count_in("notes"), 3);

        let second = seeder.seed().await.unwrap();
        assert_eq!(second, SeedOutcome::Skipped { existing: 3 });
        assert_eq!(store.count_in("notes"), 3);
    }

    #[tokio::test]
    async fn fill_if_empty_respects_admin_edits() {
        let store = MemoryStore::new();
        store.insert_stored(backdated(note("curated by admin"), 10));
        let seeder = CollectionSeeder::new(store.repo::<Note>(), defaults(), SeedPolicy::FillIfEmpty);

        let outcome = seeder.seed().await.unwrap();

        assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
        assert_eq!(store.count_in("notes"), 1);
    }

    #[tokio::test]
    async fn upsert_updates_matching_record_in_place() {
        let store = MemoryStore::new();
        let mut stale = note("alpha");
        stale.body = "stale body".to_string();
        let existing = store.insert_stored(backdated(stale, 30));

        let seeder = CollectionSeeder::new(
            store.repo::<Note>(),
            vec![note("alpha")],
            SeedPolicy::UpsertByKey,
        );

        let outcome = seeder.seed().await.unwrap();

        assert_eq!(outcome, SeedOutcome::Applied { inserted: 0, updated: 1 });
        assert_eq!(store.count_in("notes"), 1);

        let after = store.repo::<Note>().find_by_id(existing.id).await.unwrap().unwrap();
        assert_eq!(after.content.body, "alpha body");
        assert_eq!(after.created_at, existing.created_at);
        assert!(after.updated_at > existing.updated_at);
    }

    #[tokio::test]
    async fn upsert_inserts_missing_key() {
        let store = MemoryStore::new();
        store.insert_stored(backdated(note("alpha"), 30));

        let seeder = CollectionSeeder::new(
            store.repo::<Note>(),
            vec![note("alpha"), note("delta")],
            SeedPolicy::UpsertByKey,
        );

        let outcome = seeder.seed().await.unwrap();

        assert_eq!(outcome, SeedOutcome::Applied { inserted: 1, updated: 1 });
        assert_eq!(store.count_in("notes"), 2);
    }

    #[tokio::test]
    async fn upsert_is_idempotent() {
        let store = MemoryStore::new();
        let seeder = CollectionSeeder::new(store.repo::<Note>(), defaults(), SeedPolicy::UpsertByKey);

        seeder.seed().await.unwrap();
        let second = seeder.seed().await.unwrap();

        assert_eq!(second, SeedOutcome::Applied { inserted: 0, updated: 3 });
        assert_eq!(store.count_in("notes"), 3);
    }

    #[tokio::test]
    async fn invalid_default_aborts_before_writing() {
        let store = MemoryStore::new();
        let mut broken = note("broken");
        broken.score = 11;
        let seeder = CollectionSeeder::new(
            store.repo::<Note>(),
            vec![note("fine"), broken],
            SeedPolicy::FillIfEmpty,
        );

        let result = seeder.seed().await;

        assert!(matches!(
            result,
            Err(SeedError::InvalidDefault(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(store.count_in("notes"), 0);
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let store = MemoryStore::new();
        store.fail_collection("notes");
        let seeder = CollectionSeeder::new(store.repo::<Note>(), defaults(), SeedPolicy::FillIfEmpty);

        assert!(matches!(seeder.seed().await, Err(SeedError::Repository(_))));
    }
}
