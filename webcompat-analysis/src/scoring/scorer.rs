//! Scorer: folds classified issues into a `Summary`.
//!
//! risk = min(100, round(sum(base(severity) * usage multiplier)))
//! compatibility = 100 - risk

use webcompat_core::config::engine_config::DEFAULT_LAZY_LOAD_THRESHOLD_KB;
use webcompat_core::{EngineConfig, FxHashSet};

use super::types::{ImpactTier, PerformanceImpact, RiskLevel, SeverityBreakdown, Summary};
use crate::engine::Issue;
use crate::enrichment::UsageStats;

/// Adoption below this percentage raises an issue's weight.
pub const LOW_ADOPTION_PERCENT: f64 = 20.0;
/// Adoption above this percentage lowers an issue's weight.
pub const HIGH_ADOPTION_PERCENT: f64 = 60.0;
pub const LOW_ADOPTION_MULTIPLIER: f64 = 1.5;
pub const HIGH_ADOPTION_MULTIPLIER: f64 = 0.8;

pub const MAX_RISK_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    usage_weighting: bool,
    lazy_load_threshold_kb: f64,
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            usage_weighting: true,
            lazy_load_threshold_kb: DEFAULT_LAZY_LOAD_THRESHOLD_KB,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            usage_weighting: config.effective_usage_weighting(),
            lazy_load_threshold_kb: config.effective_lazy_load_threshold_kb(),
        }
    }

    pub fn with_usage_weighting(mut self, enabled: bool) -> Self {
        self.usage_weighting = enabled;
        self
    }

    pub fn with_lazy_load_threshold_kb(mut self, threshold_kb: f64) -> Self {
        self.lazy_load_threshold_kb = threshold_kb;
        self
    }

    pub fn lazy_load_threshold_kb(&self) -> f64 {
        self.lazy_load_threshold_kb
    }

    /// Weight applied to an issue's base score. Neutral without usage data.
    pub fn usage_multiplier(usage: Option<&UsageStats>) -> f64 {
        match usage {
            Some(u) if u.adoption_percent < LOW_ADOPTION_PERCENT => LOW_ADOPTION_MULTIPLIER,
            Some(u) if u.adoption_percent > HIGH_ADOPTION_PERCENT => HIGH_ADOPTION_MULTIPLIER,
            _ => 1.0,
        }
    }

    pub fn score(&self, issues: &[Issue]) -> Summary {
        if issues.is_empty() {
            return Summary::empty();
        }

        let mut breakdown = SeverityBreakdown::default();
        let mut weighted = 0.0_f64;
        let mut unweighted_seen = FxHashSet::default();
        let mut unweighted_features = Vec::new();

        for issue in issues {
            breakdown.record(issue.severity);

            let usage = issue.enrichment.as_ref().and_then(|e| e.usage.as_ref());
            if usage.is_none() && unweighted_seen.insert(issue.feature_id.as_str()) {
                unweighted_features.push(issue.feature_id.clone());
            }

            let multiplier = if self.usage_weighting {
                Self::usage_multiplier(usage)
            } else {
                1.0
            };
            weighted += issue.severity.base_score() * multiplier;
        }

        let risk_score = clamp_risk(weighted);
        Summary {
            total: issues.len(),
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            severity_breakdown: breakdown,
            compatibility_score: MAX_RISK_SCORE - risk_score,
            performance: self.performance_impact(issues),
            unweighted_features,
        }
    }

    /// Sum of bundle-size contributions over distinct matched features.
    /// `None` when no matched feature carries performance data.
    pub fn performance_impact(&self, issues: &[Issue]) -> Option<PerformanceImpact> {
        let mut seen = FxHashSet::default();
        let mut total_kb = 0.0_f64;
        let mut contributing = Vec::new();

        for issue in issues {
            if !seen.insert(issue.feature_id.as_str()) {
                continue;
            }
            let Some(profile) = issue.enrichment.as_ref().and_then(|e| e.performance.as_ref())
            else {
                continue;
            };
            total_kb += profile.bundle_size_kb;
            contributing.push(issue.feature_id.clone());
        }

        if contributing.is_empty() {
            return None;
        }

        Some(PerformanceImpact {
            total_bundle_kb: total_kb,
            tier: ImpactTier::from_kb(total_kb),
            recommend_lazy_loading: total_kb > self.lazy_load_threshold_kb,
            contributing_features: contributing,
        })
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_risk(weighted: f64) -> u32 {
    if !weighted.is_finite() || weighted <= 0.0 {
        return 0;
    }
    let rounded = weighted.round();
    if rounded >= f64::from(MAX_RISK_SCORE) {
        MAX_RISK_SCORE
    } else {
        rounded as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::UsageTrend;

    fn usage(adoption_percent: f64) -> UsageStats {
        UsageStats { adoption_percent, trend: UsageTrend::Stable }
    }

    #[test]
    fn multiplier_thresholds_are_exclusive() {
        assert_eq!(Scorer::usage_multiplier(None), 1.0);
        assert_eq!(Scorer::usage_multiplier(Some(&usage(19.9))), 1.5);
        assert_eq!(Scorer::usage_multiplier(Some(&usage(20.0))), 1.0);
        assert_eq!(Scorer::usage_multiplier(Some(&usage(60.0))), 1.0);
        assert_eq!(Scorer::usage_multiplier(Some(&usage(60.1))), 0.8);
    }

    #[test]
    fn clamp_rounds_and_caps() {
        assert_eq!(clamp_risk(0.0), 0);
        assert_eq!(clamp_risk(22.5), 23);
        assert_eq!(clamp_risk(0.8), 1);
        assert_eq!(clamp_risk(300.0), 100);
        assert_eq!(clamp_risk(f64::NAN), 0);
    }
}
