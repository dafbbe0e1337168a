mod skills_overview_service;

pub use skills_overview_service::SkillsOverviewService;
