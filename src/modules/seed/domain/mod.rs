mod policy;
mod report;

pub use policy::{SeedPolicy, UnknownSeedPolicy};
pub use report::{SeedError, SeedOutcome, SeedReport};
