//! Summary types produced by the scorer.

use std::fmt;

use serde::Serialize;

use webcompat_core::Severity;

/// Coarse bucket over the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Risk score at which a result becomes medium risk.
    pub const MEDIUM_THRESHOLD: u32 = 15;
    /// Risk score at which a result becomes high risk.
    pub const HIGH_THRESHOLD: u32 = 40;

    /// Boundaries belong to the higher tier.
    pub const fn from_score(risk_score: u32) -> Self {
        if risk_score >= Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if risk_score >= Self::MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityBreakdown {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl SeverityBreakdown {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.error += 1,
            Severity::Warning => self.warning += 1,
            Severity::Info => self.info += 1,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }

    pub fn total(&self) -> usize {
        self.error + self.warning + self.info
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    Minimal,
    Moderate,
    High,
}

impl ImpactTier {
    pub const MODERATE_KB: f64 = 10.0;
    pub const HIGH_KB: f64 = 50.0;

    pub fn from_kb(total_kb: f64) -> Self {
        if total_kb >= Self::HIGH_KB {
            ImpactTier::High
        } else if total_kb >= Self::MODERATE_KB {
            ImpactTier::Moderate
        } else {
            ImpactTier::Minimal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactTier::Minimal => "minimal",
            ImpactTier::Moderate => "moderate",
            ImpactTier::High => "high",
        }
    }
}

/// Bundle-size cost of the polyfills for the matched features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceImpact {
    pub total_bundle_kb: f64,
    pub tier: ImpactTier,
    pub recommend_lazy_loading: bool,
    /// Distinct feature ids that contributed, in first-seen order.
    pub contributing_features: Vec<String>,
}

/// Aggregate view of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub severity_breakdown: SeverityBreakdown,
    /// Always `100 - risk_score`.
    pub compatibility_score: u32,
    pub performance: Option<PerformanceImpact>,
    /// Matched feature ids that carried no usage data, so were scored with
    /// the neutral multiplier.
    pub unweighted_features: Vec<String>,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            total: 0,
            risk_score: 0,
            risk_level: RiskLevel::Low,
            severity_breakdown: SeverityBreakdown::default(),
            compatibility_score: 100,
            performance: None,
            unweighted_features: Vec::new(),
        }
    }
}
