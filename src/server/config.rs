use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_DB_MIN_CONNECTIONS: u32 = 10;
const DEFAULT_DB_MAX_LIFETIME_SECS: u64 = 60 * 60;
const DEFAULT_DB_IDLE_TIMEOUT_SECS: u64 = 10 * 60;

pub struct Config {
    pub database_url: String,
    pub api_key: String,
    pub listen_addr: SocketAddr,

    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_max_lifetime: Duration,
    pub db_idle_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` and `API_KEY` are required and must not be empty; every other
    /// variable falls back to its default when unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let listen_addr: String =
            optional(&lookup, "LISTEN_ADDR", DEFAULT_LISTEN_ADDR.to_string())?;

        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            api_key: required(&lookup, "API_KEY")?,
            listen_addr: parse("LISTEN_ADDR", listen_addr)?,
            db_max_connections: optional(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            db_min_connections: optional(&lookup, "DB_MIN_CONNECTIONS", DEFAULT_DB_MIN_CONNECTIONS)?,
            db_max_lifetime: Duration::from_secs(optional(
                &lookup,
                "DB_MAX_LIFETIME_SECS",
                DEFAULT_DB_MAX_LIFETIME_SECS,
            )?),
            db_idle_timeout: Duration::from_secs(optional(
                &lookup,
                "DB_IDLE_TIMEOUT_SECS",
                DEFAULT_DB_IDLE_TIMEOUT_SECS,
            )?),
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Some(value) => Ok(value),
        None => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => parse(name, value),
        None => Ok(default),
    }
}

fn parse<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
