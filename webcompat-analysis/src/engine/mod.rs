//! Engine facade: the entry point callers use.

pub mod compat_engine;
pub mod types;

pub use compat_engine::{CompatEngine, CompatEngineBuilder};
pub use types::{AnalysisMetadata, AnalysisResult, BatchSummary, Issue};
