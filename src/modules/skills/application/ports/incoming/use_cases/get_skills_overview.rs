use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::skills::domain::SkillsOverview;

#[async_trait]
pub trait GetSkillsOverviewUseCase: Send + Sync {
    async fn execute(&self) -> Result<SkillsOverview, ContentError>;
}
