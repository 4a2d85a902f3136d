use std::env;

use dotenvy::dotenv;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub db_max_connections: u32,
    pub run_migrations: bool,

    // Rate limiting
    pub rate_api_per_min: u32,

    /// When true, 500 responses carry a fixed message instead of the error text
    pub redact_internal_errors: bool,

    pub api_prefix: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::Config("DATABASE_URL not configured".to_string()))?;

        Ok(Self {
            database_url,
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            run_migrations: parse_var("RUN_MIGRATIONS", true)?,
            rate_api_per_min: parse_var("RATE_API_PER_MIN", 1000)?,
            redact_internal_errors: parse_var("REDACT_INTERNAL_ERRORS", false)?,
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        })
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{key} has an invalid value: {raw}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            database_url: "mysql://localhost/test".to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            db_max_connections: 1,
            run_migrations: false,
            rate_api_per_min: 0,
            redact_internal_errors: false,
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}
