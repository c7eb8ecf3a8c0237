//! Configuration for seeding runs.
//!
//! Everything comes from the environment (optionally via a `.env` file loaded by
//! the binary). The connection string is mandatory; there is no built-in default.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS: &str = "SEED_MAX_CONNECTIONS";
pub const ACQUIRE_TIMEOUT_SECS: &str = "SEED_ACQUIRE_TIMEOUT_SECS";
pub const DATASET_PATH: &str = "SEED_DATASET";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Settings for a seeding run.
#[derive(Clone)]
pub struct SeedConfig {
    /// Connection string for the catalog database.
    pub database_url: String,

    /// Upper bound on pooled connections. A run is sequential, so one is enough.
    pub max_connections: u32,

    /// How long to wait for a connection before treating the store as unreachable.
    pub acquire_timeout: Duration,

    /// JSON dataset to seed instead of the built-in sample data.
    pub dataset_path: Option<PathBuf>,
}

impl SeedConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL))?;

        let max_connections: u32 = parse_or(&lookup, MAX_CONNECTIONS, 1)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: MAX_CONNECTIONS,
                value: "0".to_string(),
            });
        }

        let acquire_timeout = Duration::from_secs(parse_or(&lookup, ACQUIRE_TIMEOUT_SECS, 5)?);

        let dataset_path = lookup(DATASET_PATH)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout,
            dataset_path,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

// Keeps credentials embedded in the connection string out of logs.
impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("database_url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("dataset_path", &self.dataset_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_missing_database_url_fails_closed() {
        let err = SeedConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(DATABASE_URL));

        let err = SeedConfig::from_lookup(lookup_from(&[(DATABASE_URL, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(DATABASE_URL));
    }

    #[test]
    fn test_defaults() {
        let config =
            SeedConfig::from_lookup(lookup_from(&[(DATABASE_URL, "postgres://localhost/shop")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/shop");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = SeedConfig::from_lookup(lookup_from(&[
            (DATABASE_URL, "postgres://localhost/shop"),
            (MAX_CONNECTIONS, "3"),
            (ACQUIRE_TIMEOUT_SECS, "30"),
            (DATASET_PATH, "fixtures/catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.max_connections, 3);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
        assert_eq!(
            config.dataset_path,
            Some(PathBuf::from("fixtures/catalog.json"))
        );
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = SeedConfig::from_lookup(lookup_from(&[
            (DATABASE_URL, "postgres://localhost/shop"),
            (MAX_CONNECTIONS, "many"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: MAX_CONNECTIONS,
                value: "many".to_string()
            }
        );

        let err = SeedConfig::from_lookup(lookup_from(&[
            (DATABASE_URL, "postgres://localhost/shop"),
            (MAX_CONNECTIONS, "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_debug_redacts_connection_string() {
        let config = SeedConfig::from_lookup(lookup_from(&[(
            DATABASE_URL,
            "postgres://admin:hunter2@db/shop",
        )]))
        .unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
    }
}
