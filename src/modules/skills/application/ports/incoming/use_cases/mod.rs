mod get_skills_overview;

pub use get_skills_overview::GetSkillsOverviewUseCase;
