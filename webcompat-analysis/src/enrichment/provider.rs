//! Enrichment providers.

use webcompat_core::FxHashMap;

use super::tables::{COMMUNITY_TABLE, PERFORMANCE_TABLE, USAGE_TABLE};
use super::types::{CommunityStats, EnrichmentRecord, PerformanceProfile, UsageStats};

/// Looks up auxiliary data for a feature. A network-backed implementation
/// can replace the embedded tables without touching the scorer.
pub trait EnrichmentProvider: Send + Sync {
    fn lookup(&self, feature_id: &str) -> Option<EnrichmentRecord>;
}

/// Serves the embedded usage, community and performance tables.
#[derive(Debug, Clone)]
pub struct StaticEnrichment {
    records: FxHashMap<&'static str, EnrichmentRecord>,
}

impl StaticEnrichment {
    pub fn new() -> Self {
        let mut records: FxHashMap<&'static str, EnrichmentRecord> = FxHashMap::default();

        for row in USAGE_TABLE {
            records.entry(row.feature_id).or_default().usage = Some(UsageStats {
                adoption_percent: row.adoption_percent,
                trend: row.trend,
            });
        }
        for row in COMMUNITY_TABLE {
            records.entry(row.feature_id).or_default().community = Some(CommunityStats {
                votes: row.votes,
                common_issues: row.common_issues.iter().map(|s| s.to_string()).collect(),
            });
        }
        for row in PERFORMANCE_TABLE {
            records.entry(row.feature_id).or_default().performance = Some(PerformanceProfile {
                bundle_size_kb: row.bundle_size_kb,
                runtime_cost: row.runtime_cost,
            });
        }

        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StaticEnrichment {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrichmentProvider for StaticEnrichment {
    fn lookup(&self, feature_id: &str) -> Option<EnrichmentRecord> {
        self.records.get(feature_id).cloned()
    }
}

/// Provider backed by an explicit map. Used to plug in data from elsewhere
/// and to pin enrichment in tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnrichment {
    records: FxHashMap<String, EnrichmentRecord>,
}

impl MapEnrichment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, feature_id: impl Into<String>, record: EnrichmentRecord) -> Self {
        self.records.insert(feature_id.into(), record);
        self
    }
}

impl EnrichmentProvider for MapEnrichment {
    fn lookup(&self, feature_id: &str) -> Option<EnrichmentRecord> {
        self.records.get(feature_id).cloned()
    }
}
