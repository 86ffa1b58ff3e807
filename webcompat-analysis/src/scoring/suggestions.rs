//! Advisory messages derived from a summary.
//!
//! Rules run in a fixed order and are independent of each other.

use webcompat_core::FxHashSet;

use super::types::Summary;
use crate::engine::Issue;

/// More newly-available or limited occurrences than this triggers advice.
const WARNING_ADVICE_THRESHOLD: usize = 2;

pub fn build_suggestions(issues: &[Issue], summary: &Summary) -> Vec<String> {
    let mut suggestions = Vec::new();
    let breakdown = &summary.severity_breakdown;

    if breakdown.error > 0 {
        suggestions.push(format!(
            "{} unsupported features may break in older browsers",
            breakdown.error
        ));
    }

    if breakdown.warning > WARNING_ADVICE_THRESHOLD {
        suggestions.push(format!(
            "{} newly available or limited features detected; verify them against your target browsers",
            breakdown.warning
        ));
    }

    let polyfillable = distinct_polyfilled_features(issues);
    if polyfillable > 0 {
        suggestions.push(format!("{polyfillable} features have a polyfill option"));
    }

    if let Some(perf) = &summary.performance {
        if perf.recommend_lazy_loading {
            suggestions.push(format!(
                "Polyfills add about {:.1} KB ({} impact); consider lazy-loading them",
                perf.total_bundle_kb,
                perf.tier.as_str()
            ));
        }
    }

    suggestions
}

fn distinct_polyfilled_features(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|i| i.polyfill.is_some())
        .map(|i| i.feature_id.as_str())
        .collect::<FxHashSet<_>>()
        .len()
}
