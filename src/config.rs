//! Configuration management for the address book demo.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How the demo prints the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per record
    #[default]
    Text,
    /// Pretty-printed JSON array of records
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be one of: text, json, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for the address book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "info")
    pub log_level: String,

    /// Output format for listing records (default: text)
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_LOG_LEVEL`: trace, debug, info, warn or error (default: "info")
    /// - `ADDRESS_BOOK_OUTPUT`: text or json (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let log_level = Self::parse_log_level("ADDRESS_BOOK_LOG_LEVEL", "info")?;

        let output = match env::var("ADDRESS_BOOK_OUTPUT") {
            Ok(val) => val.parse::<OutputFormat>().map_err(|reason| ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_OUTPUT".to_string(),
                reason,
            })?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Config { log_level, output })
    }

    /// Parse an environment variable as a log level with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_ascii_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of: {}, got: {}", LOG_LEVELS.join(", "), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}
