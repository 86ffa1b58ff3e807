//! Stable error codes shared by every error enum in the workspace.
//!
//! Renderers (CLI, editor, web UI) key off these strings, so they must not
//! change once published.

/// Implemented by every error type to expose a machine-readable code.
pub trait CompatErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CATALOG_PARSE_ERROR: &str = "CATALOG_PARSE_ERROR";
pub const CATALOG_INVALID_PATTERN: &str = "CATALOG_INVALID_PATTERN";
pub const CATALOG_DUPLICATE_ID: &str = "CATALOG_DUPLICATE_ID";
pub const CATALOG_INVALID_AVAILABILITY: &str = "CATALOG_INVALID_AVAILABILITY";
pub const CATALOG_SOURCE_UNAVAILABLE: &str = "CATALOG_SOURCE_UNAVAILABLE";
pub const CATALOG_IO_ERROR: &str = "CATALOG_IO_ERROR";

pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_IO_ERROR: &str = "CONFIG_IO_ERROR";
pub const CONFIG_INVALID_VALUE: &str = "CONFIG_INVALID_VALUE";

pub const COMMUNITY_INVALID_REQUEST: &str = "COMMUNITY_INVALID_REQUEST";
pub const COMMUNITY_UNKNOWN_FEATURE: &str = "COMMUNITY_UNKNOWN_FEATURE";
