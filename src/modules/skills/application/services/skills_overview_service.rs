use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::domain::record::CREATED_AT_FIELD;
use crate::modules::content::domain::{ListRequest, SortSpec, ADMIN_LIST_CAP};
use crate::modules::skills::application::ports::incoming::use_cases::GetSkillsOverviewUseCase;
use crate::modules::skills::domain::{Skill, SkillsOverview};

pub struct SkillsOverviewService<R>
where
    R: ContentRepository<Skill>,
{
    repository: R,
}

impl<R> SkillsOverviewService<R>
where
    R: ContentRepository<Skill>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSkillsOverviewUseCase for SkillsOverviewService<R>
where
    R: ContentRepository<Skill>,
{
    async fn execute(&self) -> Result<SkillsOverview, ContentError> {
        // Insertion order inside each category; `_id` settles equal timestamps.
        let request = ListRequest::admin::<Skill>()
            .sorted(SortSpec::asc(CREATED_AT_FIELD))
            .limit(ADMIN_LIST_CAP);

        let skills = self.repository.list(request).await?;
        Ok(SkillsOverview::from_skills(
            skills.into_iter().map(|stored| stored.content),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::record::timestamp_now;
    use crate::modules::content::domain::Stored;
    use crate::modules::skills::domain::SkillLevel;
    use crate::tests::support::content_fixtures::backdated;
    use crate::tests::support::memory_store::MemoryStore;

    fn skill(category: &str, name: &str, level: u8) -> Skill {
        Skill {
            category: category.to_string(),
            name: name.to_string(),
            level,
            years_experience: None,
        }
    }

    #[tokio::test]
    async fn groups_stored_skills_by_category() {
        let store = MemoryStore::new();
        store.insert_stored(backdated(skill("Databases", "SQL", 80), 30));
        store.insert_stored(backdated(skill("Cloud & DevOps", "AWS", 70), 20));
        store.insert_stored(backdated(skill("Databases", "MongoDB", 90), 10));
        let service = SkillsOverviewService::new(store.repo::<Skill>());

        let overview = service.execute().await.unwrap();

        assert_eq!(overview.technical.len(), 2);
        assert_eq!(
            overview.technical["Databases"],
            vec![
                SkillLevel {
                    name: "SQL".to_string(),
                    level: 80
                },
                SkillLevel {
                    name: "MongoDB".to_string(),
                    level: 90
                },
            ]
        );
        assert_eq!(overview.soft.len(), 6);
    }

    #[tokio::test]
    async fn equal_timestamps_keep_creation_order() {
        let store = MemoryStore::new();
        let now = timestamp_now();
        let rust = Stored::new(skill("Languages", "Rust", 85), now);
        let go = Stored::new(skill("Languages", "Go", 60), now);
        let python = Stored::new(skill("Languages", "Python", 75), now);
        // Physical order in the store differs from creation order.
        store.insert_stored(python);
        store.insert_stored(rust);
        store.insert_stored(go);
        let service = SkillsOverviewService::new(store.repo::<Skill>());

        let overview = service.execute().await.unwrap();

        let names: Vec<&str> = overview.technical["Languages"]
            .iter()
            .map(|skill| skill.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rust", "Go", "Python"]);
    }

    #[tokio::test]
    async fn empty_collection_yields_only_soft_skills() {
        let store = MemoryStore::new();
        let service = SkillsOverviewService::new(store.repo::<Skill>());

        let overview = service.execute().await.unwrap();

        assert!(overview.technical.is_empty());
        assert!(!overview.soft.is_empty());
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let store = MemoryStore::new();
        store.fail_collection("skills");
        let service = SkillsOverviewService::new(store.repo::<Skill>());

        let err = service.execute().await.unwrap_err();

        assert!(matches!(err, ContentError::RepositoryError(_)));
    }
}
