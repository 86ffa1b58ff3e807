//! Result types returned by the engine. Owned by the caller.

use chrono::{DateTime, Utc};
use serde::Serialize;

use webcompat_core::{BaselineStatus, FeatureGroup, Language, Severity};

use crate::enrichment::EnrichmentRecord;
use crate::fixes::QuickFix;
use crate::scoring::Summary;

/// One feature occurrence in the analysed text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub feature_id: String,
    pub feature_name: String,
    pub group: FeatureGroup,
    /// 1-based.
    pub line: u32,
    /// 1-based character offset of the first matched character.
    pub column: u32,
    pub matched_text: String,
    pub source_line: String,
    pub status: BaselineStatus,
    pub severity: Severity,
    pub message: String,
    pub fallback: Option<String>,
    pub polyfill: Option<String>,
    pub documentation_url: Option<String>,
    pub spec_url: Option<String>,
    pub enrichment: Option<EnrichmentRecord>,
    pub quick_fix: Option<QuickFix>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisMetadata {
    pub timestamp: DateTime<Utc>,
    pub language: Language,
    pub line_count: usize,
    pub character_count: usize,
    pub catalog_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Catalog order, then line order.
    pub issues: Vec<Issue>,
    pub summary: Summary,
    pub suggestions: Vec<String>,
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    pub fn has_errors(&self) -> bool {
        self.summary.severity_breakdown.error > 0
    }

    /// Snake_case JSON for renderers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn issues_for<'a>(&'a self, feature_id: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |i| i.feature_id == feature_id)
    }
}

/// Totals across the results of `analyze_batch`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub inputs: usize,
    pub total_issues: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    /// Mean compatibility score; 100 for an empty batch.
    pub average_compatibility: f64,
    pub max_risk_score: u32,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut summary = Self {
            inputs: results.len(),
            total_issues: 0,
            error_count: 0,
            warning_count: 0,
            info_count: 0,
            average_compatibility: 100.0,
            max_risk_score: 0,
        };
        if results.is_empty() {
            return summary;
        }

        let mut compat_sum = 0.0_f64;
        for result in results {
            let s = &result.summary;
            summary.total_issues += s.total;
            summary.error_count += s.severity_breakdown.error;
            summary.warning_count += s.severity_breakdown.warning;
            summary.info_count += s.severity_breakdown.info;
            summary.max_risk_score = summary.max_risk_score.max(s.risk_score);
            compat_sum += f64::from(s.compatibility_score);
        }
        summary.average_compatibility = compat_sum / results.len() as f64;
        summary
    }
}
