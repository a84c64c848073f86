use std::net::SocketAddr;

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60 * 24 * 7;
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Lifetime of issued bearer tokens.
    pub token_ttl: Duration,

    /// Single allowed CORS origin; every origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = optional_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                value: bind_addr.clone(),
            })?;

        let token_ttl = match optional_var("TOKEN_TTL_SECONDS") {
            Some(value) => match value.parse::<i64>() {
                Ok(seconds) if seconds > 0 => Duration::seconds(seconds),
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "TOKEN_TTL_SECONDS".to_string(),
                        value,
                    }
                    .into())
                }
            },
            None => Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr,
            token_ttl,
            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
            log_level: optional_var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
