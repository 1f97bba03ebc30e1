//! Configuration management for the contact CRM.
//!
//! This module handles loading and validating configuration from environment variables.
//! An optional `.env` file is read first; it never prints to stdout, which the
//! MCP transport owns.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact CRM server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON table file (default: "db.json")
    pub db_path: PathBuf,

    /// Validate contacts added through the server when the caller
    /// does not say otherwise (default: false)
    pub validate_on_add: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DB_PATH`: JSON table file (default: "db.json")
    /// - `CONTACTS_VALIDATE_ON_ADD`: "true"/"false"/"1"/"0" (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let db_path = match env::var("CONTACTS_DB_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_DB_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.db_path,
        };

        let validate_on_add =
            Self::parse_env_bool("CONTACTS_VALIDATE_ON_ADD", defaults.validate_on_add)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            db_path,
            validate_on_add,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from("db.json"),
            validate_on_add: false,
            log_level: "error".to_string(),
        }
    }
}
