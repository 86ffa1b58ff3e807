//! Embedded enrichment tables, keyed by feature id.
//!
//! Hand-maintained snapshots. Ids with no row simply get no annotation.

use super::types::{RuntimeCost, UsageTrend};

pub struct UsageRow {
    pub feature_id: &'static str,
    pub adoption_percent: f64,
    pub trend: UsageTrend,
}

pub struct CommunityRow {
    pub feature_id: &'static str,
    pub votes: u32,
    pub common_issues: &'static [&'static str],
}

pub struct PerformanceRow {
    pub feature_id: &'static str,
    pub bundle_size_kb: f64,
    pub runtime_cost: RuntimeCost,
}

pub static USAGE_TABLE: &[UsageRow] = &[
    UsageRow { feature_id: "optional-chaining", adoption_percent: 78.0, trend: UsageTrend::Stable },
    UsageRow { feature_id: "nullish-coalescing", adoption_percent: 71.0, trend: UsageTrend::Stable },
    UsageRow { feature_id: "logical-assignment", adoption_percent: 34.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "array-at", adoption_percent: 41.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "structured-clone", adoption_percent: 22.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "object-hasown", adoption_percent: 19.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "array-find-last", adoption_percent: 12.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "change-array-by-copy", adoption_percent: 9.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "array-group", adoption_percent: 6.5, trend: UsageTrend::Rising },
    UsageRow { feature_id: "promise-withresolvers", adoption_percent: 3.2, trend: UsageTrend::Rising },
    UsageRow { feature_id: "temporal", adoption_percent: 0.4, trend: UsageTrend::Rising },
    UsageRow { feature_id: "decorators", adoption_percent: 14.0, trend: UsageTrend::Stable },
    UsageRow { feature_id: "css-has", adoption_percent: 27.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "css-nesting", adoption_percent: 21.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "container-queries", adoption_percent: 18.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "cascade-layers", adoption_percent: 11.0, trend: UsageTrend::Stable },
    UsageRow { feature_id: "focus-visible", adoption_percent: 64.0, trend: UsageTrend::Stable },
    UsageRow { feature_id: "viewport-units", adoption_percent: 38.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "anchor-positioning", adoption_percent: 1.1, trend: UsageTrend::Rising },
    UsageRow { feature_id: "dialog-element", adoption_percent: 24.0, trend: UsageTrend::Rising },
    UsageRow { feature_id: "loading-lazy", adoption_percent: 69.0, trend: UsageTrend::Stable },
    UsageRow { feature_id: "popover-attribute", adoption_percent: 5.0, trend: UsageTrend::Rising },
];

pub static COMMUNITY_TABLE: &[CommunityRow] = &[
    CommunityRow {
        feature_id: "css-has",
        votes: 1840,
        common_issues: &["Forgiving selector list parsing differs between engines"],
    },
    CommunityRow {
        feature_id: "container-queries",
        votes: 1512,
        common_issues: &["Container must establish containment before queries apply"],
    },
    CommunityRow {
        feature_id: "dialog-element",
        votes: 930,
        common_issues: &[
            "Focus is not always restored on close",
            "Backdrop click does not close the dialog by default",
        ],
    },
    CommunityRow {
        feature_id: "structured-clone",
        votes: 611,
        common_issues: &["Functions and DOM nodes throw DataCloneError"],
    },
    CommunityRow {
        feature_id: "anchor-positioning",
        votes: 2210,
        common_issues: &["Fallback positions need position-try rules"],
    },
    CommunityRow {
        feature_id: "temporal",
        votes: 3050,
        common_issues: &["Polyfill is large; load it on demand"],
    },
    CommunityRow {
        feature_id: "popover-attribute",
        votes: 802,
        common_issues: &["Light dismiss interacts badly with nested popovers"],
    },
];

pub static PERFORMANCE_TABLE: &[PerformanceRow] = &[
    PerformanceRow { feature_id: "array-at", bundle_size_kb: 0.5, runtime_cost: RuntimeCost::Negligible },
    PerformanceRow { feature_id: "structured-clone", bundle_size_kb: 4.5, runtime_cost: RuntimeCost::Medium },
    PerformanceRow { feature_id: "object-hasown", bundle_size_kb: 0.6, runtime_cost: RuntimeCost::Negligible },
    PerformanceRow { feature_id: "array-find-last", bundle_size_kb: 1.2, runtime_cost: RuntimeCost::Negligible },
    PerformanceRow { feature_id: "change-array-by-copy", bundle_size_kb: 3.0, runtime_cost: RuntimeCost::Low },
    PerformanceRow { feature_id: "array-group", bundle_size_kb: 2.1, runtime_cost: RuntimeCost::Low },
    PerformanceRow { feature_id: "promise-withresolvers", bundle_size_kb: 0.9, runtime_cost: RuntimeCost::Negligible },
    PerformanceRow { feature_id: "set-methods", bundle_size_kb: 6.8, runtime_cost: RuntimeCost::Low },
    PerformanceRow { feature_id: "iterator-helpers", bundle_size_kb: 9.4, runtime_cost: RuntimeCost::Low },
    PerformanceRow { feature_id: "temporal", bundle_size_kb: 58.0, runtime_cost: RuntimeCost::High },
    PerformanceRow { feature_id: "css-has", bundle_size_kb: 5.2, runtime_cost: RuntimeCost::High },
    PerformanceRow { feature_id: "container-queries", bundle_size_kb: 9.6, runtime_cost: RuntimeCost::Medium },
    PerformanceRow { feature_id: "focus-visible", bundle_size_kb: 1.4, runtime_cost: RuntimeCost::Low },
    PerformanceRow { feature_id: "anchor-positioning", bundle_size_kb: 38.5, runtime_cost: RuntimeCost::High },
    PerformanceRow { feature_id: "scroll-driven-animations", bundle_size_kb: 21.0, runtime_cost: RuntimeCost::High },
    PerformanceRow { feature_id: "dialog-element", bundle_size_kb: 7.8, runtime_cost: RuntimeCost::Low },
    PerformanceRow { feature_id: "popover-attribute", bundle_size_kb: 11.4, runtime_cost: RuntimeCost::Medium },
    PerformanceRow { feature_id: "inert-attribute", bundle_size_kb: 4.1, runtime_cost: RuntimeCost::Medium },
    PerformanceRow { feature_id: "declarative-shadow-dom", bundle_size_kb: 1.0, runtime_cost: RuntimeCost::Low },
];
