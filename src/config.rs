//! Configuration management for the address book binary.
//!
//! This module handles loading and validating configuration from environment variables.
//! An optional `.env` file in the working directory is honoured.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the demo binary renders the address book on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Contact name: ..., phones: ...` line per record
    #[default]
    Text,

    /// Pretty-printed JSON array of records
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_OUTPUT".to_string(),
                reason: format!("Must be one of: text, json, got: {}", other),
            }),
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

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,

    /// Output format for the rendered book (default: text)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let output_format = match env::var("ADDRESS_BOOK_OUTPUT") {
            Ok(val) => val.parse::<OutputFormat>()?,
            Err(env::VarError::NotPresent) => OutputFormat::default(),
            Err(e) => {
                return Err(ConfigError::Other(format!(
                    "ADDRESS_BOOK_OUTPUT is not readable: {}",
                    e
                )))
            }
        };

        Ok(Config {
            log_level,
            output_format,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}
