//! # webcompat-core
//!
//! Foundation crate for the webcompat feature-detection engine.
//! Defines the shared types, errors, config, clock, and tracing setup.
//! The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::error_code::CompatErrorCode;
pub use types::baseline::{BaselineStatus, Severity};
pub use types::clock::{Clock, FixedClock, SystemClock};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::language::{FeatureGroup, Language};
