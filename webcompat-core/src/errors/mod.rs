//! Error types for every subsystem, each carrying a stable error code.

pub mod catalog_error;
pub mod community_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;

pub use catalog_error::CatalogError;
pub use community_error::CommunityError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
