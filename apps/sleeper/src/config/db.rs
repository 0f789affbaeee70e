use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::parse_var;
use crate::error::AppError;

pub const DEFAULT_DB_PATH: &str = "sleeper.db";
const MEMORY_PATH: &str = ":memory:";

/// Where the SQLite store lives
#[derive(Debug, Clone, PartialEq)]
pub enum DbLocation {
    /// On-disk database file, created if missing
    File(PathBuf),
    /// Private in-memory database (single pooled connection)
    Memory,
}

/// Store connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct DbSettings {
    pub location: DbLocation,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
    pub busy_timeout_ms: u64,
    /// Upper bound on a single store call issued by a handler
    pub query_timeout_ms: u64,
}

impl DbSettings {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DbLocation::File(path.into()),
            ..Self::defaults()
        }
    }

    pub fn memory() -> Self {
        Self {
            location: DbLocation::Memory,
            ..Self::defaults()
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Reads the `SLEEPER_DB_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::defaults();
        let raw_path = lookup("SLEEPER_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let location = match raw_path.trim() {
            "" => {
                return Err(AppError::config(
                    "Environment variable 'SLEEPER_DB_PATH' must not be empty",
                ))
            }
            MEMORY_PATH => DbLocation::Memory,
            path => DbLocation::File(PathBuf::from(path)),
        };

        let pool_max = parse_var(&lookup, "SLEEPER_DB_POOL_MAX", defaults.pool_max)?;
        if pool_max == 0 {
            return Err(AppError::config(
                "Environment variable 'SLEEPER_DB_POOL_MAX' must be at least 1",
            ));
        }

        Ok(Self {
            location,
            pool_max,
            acquire_timeout_ms: parse_var(
                &lookup,
                "SLEEPER_DB_ACQUIRE_TIMEOUT_MS",
                defaults.acquire_timeout_ms,
            )?,
            busy_timeout_ms: parse_var(
                &lookup,
                "SLEEPER_DB_BUSY_TIMEOUT_MS",
                defaults.busy_timeout_ms,
            )?,
            query_timeout_ms: parse_var(
                &lookup,
                "SLEEPER_DB_QUERY_TIMEOUT_MS",
                defaults.query_timeout_ms,
            )?,
        })
    }

    fn defaults() -> Self {
        Self {
            location: DbLocation::File(PathBuf::from(DEFAULT_DB_PATH)),
            pool_max: 8,
            acquire_timeout_ms: 5_000,
            busy_timeout_ms: 5_000,
            query_timeout_ms: 10_000,
        }
    }
}

impl Default for DbSettings {
    fn default() -> Self {
        Self::defaults()
    }
}
