use std::sync::Arc;

use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::outgoing::RepositoryProvider;
use crate::modules::skills::application::ports::incoming::use_cases::GetSkillsOverviewUseCase;
use crate::modules::skills::application::services::SkillsOverviewService;
use crate::modules::skills::domain::Skill;

/// Admin CRUD plus the grouped public view.
#[derive(Clone)]
pub struct SkillUseCases {
    pub content: ContentUseCases<Skill>,
    pub overview: Arc<dyn GetSkillsOverviewUseCase + Send + Sync>,
}

impl SkillUseCases {
    pub fn assemble<P: RepositoryProvider>(provider: &P) -> Self {
        Self {
            content: ContentUseCases::assemble(provider),
            overview: Arc::new(SkillsOverviewService::new(provider.repository::<Skill>())),
        }
    }
}
