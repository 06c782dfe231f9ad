//! Configuration for the contact book demo.
//!
//! The library itself never reads the environment; only the binary calls
//! [`Config::from_env`].

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Records per batch when paging through the book (default: 1)
    pub page_size: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per batch, greater than 0 (default: 1)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", 1)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            page_size: 1,
            log_level: "info".to_string(),
        }
    }
}
