//! Engine construction errors.

use super::error_code::CompatErrorCode;
use super::{CatalogError, ConfigError};

/// Why a `CompatEngine` could not be built. Delegates its code to the
/// wrapped error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl CompatErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
