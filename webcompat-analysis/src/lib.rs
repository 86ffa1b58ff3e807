//! # webcompat-analysis
//!
//! Web-platform feature detection and compatibility scoring.
//!
//! Pipeline: source text → line matcher (catalog patterns) → classifier
//! (availability tier, severity) → scorer (risk, compatibility,
//! suggestions). Optional enrichment and quick fixes annotate issues.
//!
//! ```no_run
//! use webcompat_analysis::CompatEngine;
//!
//! let engine = CompatEngine::new()?;
//! let result = engine.analyze("const x = a?.b ?? 'y';", "javascript");
//! println!("compatibility: {}", result.summary.compatibility_score);
//! # Ok::<(), webcompat_core::errors::EngineError>(())
//! ```

pub mod catalog;
pub mod classifier;
pub mod community;
pub mod engine;
pub mod enrichment;
pub mod fixes;
pub mod matcher;
pub mod scoring;

pub use catalog::{Catalog, CatalogSource, FeatureDescriptor};
pub use community::{FeatureRequest, FeatureRequestReceipt, VoteAck, VoteDirection};
pub use engine::{AnalysisMetadata, AnalysisResult, BatchSummary, CompatEngine, Issue};
pub use enrichment::{EnrichmentProvider, EnrichmentRecord, StaticEnrichment};
pub use scoring::{RiskLevel, Summary};
