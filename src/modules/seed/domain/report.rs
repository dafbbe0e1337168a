use crate::modules::content::application::ports::outgoing::RepositoryError;
use crate::modules::content::domain::{PatchError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Fill-if-empty found existing content.
    Skipped { existing: u64 },

    Applied { inserted: usize, updated: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error("default record is invalid: {0}")]
    InvalidDefault(#[from] ValidationError),

    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("could not build update: {0}")]
    Patch(#[from] PatchError),
}

/// Result of one seeding run, per collection, in run order.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub entries: Vec<(&'static str, Result<SeedOutcome, SeedError>)>,
}

impl SeedReport {
    pub fn outcome(&self, collection: &str) -> Option<&Result<SeedOutcome, SeedError>> {
        self.entries
            .iter()
            .find(|(name, _)| *name == collection)
            .map(|(_, outcome)| outcome)
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_err()).count()
    }
}
