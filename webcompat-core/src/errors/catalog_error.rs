//! Feature catalog construction errors.

use super::error_code::{self, CompatErrorCode};

/// Errors raised while building the feature catalog.
///
/// Failures in the built-in packs are fatal. Failures in custom packs or an
/// external source are logged and recovered by the registry.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Feature pack parse error in '{pack}': {message}")]
    Parse { pack: String, message: String },

    #[error("Invalid detection pattern for feature '{feature_id}': {message}")]
    InvalidPattern { feature_id: String, message: String },

    #[error("Duplicate feature id '{feature_id}' (first defined in pack '{first_pack}')")]
    DuplicateId { feature_id: String, first_pack: String },

    #[error("Invalid availability data for feature '{feature_id}': {message}")]
    InvalidAvailability { feature_id: String, message: String },

    #[error("Catalog source '{source_name}' unavailable: {message}")]
    SourceUnavailable { source_name: String, message: String },

    #[error("Failed to read feature pack {path}: {message}")]
    Io { path: String, message: String },
}

impl CompatErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => error_code::CATALOG_PARSE_ERROR,
            Self::InvalidPattern { .. } => error_code::CATALOG_INVALID_PATTERN,
            Self::DuplicateId { .. } => error_code::CATALOG_DUPLICATE_ID,
            Self::InvalidAvailability { .. } => error_code::CATALOG_INVALID_AVAILABILITY,
            Self::SourceUnavailable { .. } => error_code::CATALOG_SOURCE_UNAVAILABLE,
            Self::Io { .. } => error_code::CATALOG_IO_ERROR,
        }
    }
}
