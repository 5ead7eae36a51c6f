//! Module: config
//! Responsibility: backend selection resolved once at process start.
//! Does not own: connecting to any backend; outputs are plain values.
//!
//! Resolution is split in two: [`Config::from_env`] reads the
//! environment exactly once, and the pure `resolve_*` functions map a
//! choice plus settings to an explicit backend config. No hidden
//! mutable state survives startup.

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Cache entry lifetime applied when `CACHE_TTL` is unset, in seconds.
pub const DEFAULT_CACHE_TTL: u64 = 60 * 1500;

///
/// CacheBackend
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Memcached,
    Redis,
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Memcached => "memcached",
            Self::Redis => "redis",
        };
        write!(f, "{label}")
    }
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memcached" => Ok(Self::Memcached),
            "redis" => Ok(Self::Redis),
            other => Err(ConfigError::InvalidEnv {
                var: "CACHE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

///
/// DatabaseBackend
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Mysql,
    Postgres,
    #[default]
    #[serde(rename = "sqlite3")]
    Sqlite,
}

impl fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite3",
        };
        write!(f, "{label}")
    }
}

impl FromStr for DatabaseBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Self::Mysql),
            "postgres" => Ok(Self::Postgres),
            "sqlite3" => Ok(Self::Sqlite),
            other => Err(ConfigError::InvalidEnv {
                var: "DATABASE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

///
/// ChannelBackend
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelBackend {
    #[default]
    InMemory,
    Redis,
}

impl fmt::Display for ChannelBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InMemory => "in_memory",
            Self::Redis => "redis",
        };
        write!(f, "{label}")
    }
}

impl FromStr for ChannelBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_memory" => Ok(Self::InMemory),
            "redis" => Ok(Self::Redis),
            other => Err(ConfigError::InvalidEnv {
                var: "CHANNEL_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

///
/// RedisSettings
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
        }
    }
}

///
/// DatabaseSettings
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "postgres".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
        }
    }
}

///
/// CacheConfig
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub location: String,
    pub ttl: u64,
}

///
/// DatabaseConfig
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum DatabaseConfig {
    /// Local file database; no server settings apply.
    Sqlite { file: String },

    /// Server database, mysql or postgres.
    Server {
        engine: DatabaseBackend,
        host: String,
        port: u16,
        name: String,
        user: String,
        password: String,
    },
}

///
/// ChannelConfig
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChannelConfig {
    pub backend: ChannelBackend,
    pub hosts: Vec<(String, u16)>,
}

/// Map a cache backend choice to its explicit config.
#[must_use]
pub fn resolve_cache_backend(
    choice: CacheBackend,
    redis: &RedisSettings,
    ttl: u64,
) -> CacheConfig {
    let location = match choice {
        CacheBackend::Redis => format!("redis://{}:{}", redis.host, redis.port),
        CacheBackend::Memcached => "127.0.0.1:11211".to_string(),
    };

    CacheConfig {
        backend: choice,
        location,
        ttl,
    }
}

/// Map a database backend choice to its explicit config.
#[must_use]
pub fn resolve_database_backend(
    choice: DatabaseBackend,
    settings: &DatabaseSettings,
) -> DatabaseConfig {
    match choice {
        DatabaseBackend::Sqlite => DatabaseConfig::Sqlite {
            file: "db.sqlite3".to_string(),
        },
        engine => DatabaseConfig::Server {
            engine,
            host: settings.host.clone(),
            port: settings.port,
            name: settings.name.clone(),
            user: settings.user.clone(),
            password: settings.password.clone(),
        },
    }
}

/// Map a channel backend choice to its explicit config.
#[must_use]
pub fn resolve_channel_backend(choice: ChannelBackend, redis: &RedisSettings) -> ChannelConfig {
    let hosts = match choice {
        ChannelBackend::Redis => vec![(redis.host.clone(), redis.port)],
        ChannelBackend::InMemory => Vec::new(),
    };

    ChannelConfig {
        backend: choice,
        hosts,
    }
}

///
/// Config
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Config {
    pub cache: CacheConfig,
    pub database: DatabaseConfig,
    pub channel: ChannelConfig,
}

impl Config {
    /// Resolve the full configuration from environment variables.
    /// Intended to run exactly once at process start; everything
    /// downstream receives the resolved value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cache_choice: CacheBackend = env_or("CACHE_BACKEND", "memcached").parse()?;
        let database_choice: DatabaseBackend = env_or("DATABASE_BACKEND", "sqlite3").parse()?;
        let channel_choice: ChannelBackend = env_or("CHANNEL_BACKEND", "in_memory").parse()?;

        let redis = RedisSettings {
            host: env_or("REDIS_HOST", "localhost"),
            port: env_port("REDIS_PORT", 6379)?,
        };

        let database = DatabaseSettings {
            host: env_or("DATABASE_HOST", "localhost"),
            port: env_port("DATABASE_PORT", 5432)?,
            name: env_or("DATABASE_NAME", "postgres"),
            user: env_or("DATABASE_USER", "postgres"),
            password: env_or("DATABASE_PASSWORD", "postgres"),
        };

        let ttl = match std::env::var("CACHE_TTL") {
            Err(_) => DEFAULT_CACHE_TTL,
            Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                var: "CACHE_TTL",
                value: raw,
            })?,
        };

        Ok(Self {
            cache: resolve_cache_backend(cache_choice, &redis, ttl),
            database: resolve_database_backend(database_choice, &database),
            channel: resolve_channel_backend(channel_choice, &redis),
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn env_port(var: &'static str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(var) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
    }
}
