//! Configuration management for the contact book.
//!
//! Values come from environment variables, with an optional `.env` file
//! loaded first.

use crate::book::DEFAULT_BATCH_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records per batch when listing the book (default: 10)
    pub batch_size: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_BATCH_SIZE`: Records per batch (default: 10, must be > 0)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let batch_size = Self::parse_env_usize("CONTACT_BOOK_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_BATCH_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            batch_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            batch_size: DEFAULT_BATCH_SIZE,
            log_level: "warn".to_string(),
        }
    }
}
