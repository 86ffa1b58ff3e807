//! Optional enrichment: usage, community and performance annotations.

pub mod provider;
pub mod tables;
pub mod types;

pub use provider::{EnrichmentProvider, MapEnrichment, StaticEnrichment};
pub use types::{
    CommunityStats, EnrichmentRecord, PerformanceProfile, RuntimeCost, UsageStats, UsageTrend,
};
