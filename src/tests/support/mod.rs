pub mod app_state_builder;
pub mod content_fixtures;
pub mod memory_store;
