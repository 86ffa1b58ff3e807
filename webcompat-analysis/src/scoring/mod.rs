//! Aggregation: risk score, compatibility score, breakdown, suggestions.

pub mod scorer;
pub mod suggestions;
pub mod types;

pub use scorer::Scorer;
pub use suggestions::build_suggestions;
pub use types::{ImpactTier, PerformanceImpact, RiskLevel, SeverityBreakdown, Summary};
