use std::{fmt, net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use maintenance_storage_sqlite::{PoolConfig, DEFAULT_DB_PATH};

/// Which repository implementation backs the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!(
                "Invalid MT_STORAGE '{}', expected 'sqlite' or 'memory'",
                other
            )),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sqlite => f.write_str("sqlite"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub storage: StorageBackend,
    pub db_path: String,
    pub pool: PoolConfig,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            storage: StorageBackend::default(),
            db_path: DEFAULT_DB_PATH.to_string(),
            pool: PoolConfig::default(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
        }
    }
}

impl Config {
    /// Reads the configuration from `MT_*` environment variables, after
    /// loading a `.env` file if one is present. Unset variables keep their
    /// defaults; malformed values are an error.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        let listen_addr = match env("MT_LISTEN_ADDR") {
            Some(v) => v
                .parse()
                .with_context(|| format!("Invalid MT_LISTEN_ADDR '{}'", v))?,
            None => defaults.listen_addr,
        };
        let storage = match env("MT_STORAGE") {
            Some(v) => v.parse()?,
            None => defaults.storage,
        };
        let db_path = env("MT_DB_PATH")
            .or_else(|| env("DATABASE_URL"))
            .unwrap_or(defaults.db_path);
        let cors_allow = env("MT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let pool = PoolConfig {
            max_connections: parse_or("MT_DB_MAX_CONNECTIONS", defaults.pool.max_connections)?,
            min_connections: parse_or("MT_DB_MIN_CONNECTIONS", defaults.pool.min_connections)?,
            max_lifetime: match parse_or::<u64>("MT_DB_MAX_LIFETIME_SECS", 3600)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            operation_timeout: Duration::from_millis(parse_or("MT_DB_TIMEOUT_MS", 3000)?),
        };
        let config = Self {
            listen_addr,
            storage,
            db_path,
            pool,
            cors_allow,
            request_timeout: Duration::from_millis(parse_or("MT_REQUEST_TIMEOUT_MS", 30_000)?),
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the server cannot start with.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.pool.validate().context("Invalid MT_DB_* pool settings")?;
        if self.request_timeout.is_zero() {
            return Err(anyhow!("MT_REQUEST_TIMEOUT_MS must be positive"));
        }
        Ok(())
    }
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env(key) {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} '{}'", key, v)),
        None => Ok(default),
    }
}
