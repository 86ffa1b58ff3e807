//! Auxiliary per-feature annotations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageTrend {
    Rising,
    Stable,
    Declining,
}

/// Real-world adoption of a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Share of surveyed sites using the feature, 0–100.
    pub adoption_percent: f64,
    pub trend: UsageTrend,
}

/// Community interest and known pitfalls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub votes: u32,
    pub common_issues: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeCost {
    Negligible,
    Low,
    Medium,
    High,
}

/// Cost of shipping a fallback for a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    /// Bundle-size contribution of the polyfill or fallback, in KB.
    pub bundle_size_kb: f64,
    pub runtime_cost: RuntimeCost,
}

/// Everything a provider knows about one feature. Any part may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub usage: Option<UsageStats>,
    pub community: Option<CommunityStats>,
    pub performance: Option<PerformanceProfile>,
}

impl EnrichmentRecord {
    pub fn is_empty(&self) -> bool {
        self.usage.is_none() && self.community.is_none() && self.performance.is_none()
    }
}
