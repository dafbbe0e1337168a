pub mod defaults;
pub mod entities;

pub use entities::{featured_projects, Project, ProjectStatus, ProjectUpdate, FEATURED_PROJECTS_LIMIT};
