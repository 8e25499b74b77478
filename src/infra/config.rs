//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pool: PoolConfig,
}

/// Bounds for the shared Postgres connection pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 25,
            min_connections: 0,
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(300),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?
                .max(1),
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
            idle_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
            )?),
            max_lifetime: Duration::from_secs(parse_or(
                &lookup,
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime.as_secs(),
            )?),
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )?),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            database_url: database_url(&lookup)?,
            pool,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database URL must be provided (no default) for safety. `DB_CONN` is accepted as an alias.
fn database_url<F>(lookup: &F) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup("DATABASE_URL")
        .or_else(|| lookup("DB_CONN"))
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        _ => Ok(default),
    }
}
