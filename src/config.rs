use std::collections::HashMap;
use std::time::Duration;

use crate::modules::seed::domain::SeedPolicy;

const SEED_POLICY_PREFIX: &str = "SEED_POLICY_";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}={value} is invalid: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub default_policy: SeedPolicy,
    /// Keyed by collection name (`personal_info`, `blog_posts`, ...).
    pub overrides: HashMap<String, SeedPolicy>,
}

impl SeedConfig {
    pub fn policy_for(&self, collection: &str) -> SeedPolicy {
        self.overrides
            .get(collection)
            .copied()
            .unwrap_or(self.default_policy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`), then reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let get = |key: &str, default: &str| -> String {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let server = ServerConfig {
            host: get("HOST", "0.0.0.0"),
            port: parse("PORT", &get("PORT", "8000"))?,
        };

        let store = StoreConfig {
            uri: get("MONGO_URL", "mongodb://localhost:27017"),
            database: get("DB_NAME", "portfolio"),
            max_pool_size: parse("MONGO_MAX_POOL_SIZE", &get("MONGO_MAX_POOL_SIZE", "20"))?,
            connect_timeout: Duration::from_secs(parse(
                "MONGO_CONNECT_TIMEOUT_SECS",
                &get("MONGO_CONNECT_TIMEOUT_SECS", "5"),
            )?),
        };

        let mut overrides = HashMap::new();
        for (key, value) in &vars {
            if let Some(collection) = key.strip_prefix(SEED_POLICY_PREFIX) {
                overrides.insert(collection.to_ascii_lowercase(), parse_policy(key, value)?);
            }
        }

        let seed = SeedConfig {
            enabled: parse_flag("SEED_ON_STARTUP", &get("SEED_ON_STARTUP", "true"))?,
            default_policy: parse_policy("SEED_POLICY", &get("SEED_POLICY", "fill-if-empty"))?,
            overrides,
        };

        Ok(Self {
            server,
            store,
            seed,
        })
    }
}

fn invalid(key: &str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| invalid(key, value, e))
}

fn parse_policy(key: &str, value: &str) -> Result<SeedPolicy, ConfigError> {
    value.parse().map_err(|e| invalid(key, value, e))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "expected true or false")),
    }
}
