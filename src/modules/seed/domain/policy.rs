use std::fmt;
use std::str::FromStr;

/// How the seeder treats a collection that may already hold content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Insert the defaults only into an empty collection. Admin edits,
    /// deletions included, always win.
    #[default]
    FillIfEmpty,

    /// Match every default by natural key: merge it onto the match, or
    /// insert it when absent. Re-applies default content on every run.
    UpsertByKey,
}

impl SeedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedPolicy::FillIfEmpty => "fill-if-empty",
            SeedPolicy::UpsertByKey => "upsert-by-key",
        }
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown seed policy '{0}' (expected fill-if-empty or upsert-by-key)")]
pub struct UnknownSeedPolicy(pub String);

impl FromStr for SeedPolicy {
    type Err = UnknownSeedPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "fill-if-empty" => Ok(SeedPolicy::FillIfEmpty),
            "upsert-by-key" => Ok(SeedPolicy::UpsertByKey),
            _ => Err(UnknownSeedPolicy(s.to_string())),
        }
    }
}
