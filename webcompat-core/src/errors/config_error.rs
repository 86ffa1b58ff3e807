//! Configuration loading errors.

use super::error_code::{self, CompatErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error: {message}")]
    Parse { message: String },

    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl CompatErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => error_code::CONFIG_PARSE_ERROR,
            Self::Io { .. } => error_code::CONFIG_IO_ERROR,
            Self::InvalidValue { .. } => error_code::CONFIG_INVALID_VALUE,
        }
    }
}
