//! End-to-end tests for `CompatEngine::analyze`.

use webcompat_analysis::catalog::{CatalogSource, PackText};
use webcompat_analysis::enrichment::{
    EnrichmentRecord, MapEnrichment, UsageStats, UsageTrend,
};
use webcompat_analysis::scoring::{ImpactTier, RiskLevel};
use webcompat_analysis::{BatchSummary, CompatEngine};
use webcompat_core::errors::{CatalogError, EngineError};
use webcompat_core::{
    BaselineStatus, Clock, CompatErrorCode, EngineConfig, FixedClock, Language, Severity,
};

fn clock() -> FixedClock {
    FixedClock::at_date(2026, 10, 16).unwrap()
}

fn engine() -> CompatEngine {
    CompatEngine::builder().clock(clock()).build().unwrap()
}

fn engine_with(config: EngineConfig) -> CompatEngine {
    CompatEngine::builder().clock(clock()).config(config).build().unwrap()
}

#[test]
fn optional_chaining_and_nullish_coalescing() {
    let result = engine().analyze("const x = a?.b ?? 'y';", "javascript");

    let ids: Vec<&str> = result.issues.iter().map(|i| i.feature_id.as_str()).collect();
    assert_eq!(ids, ["optional-chaining", "nullish-coalescing"]);

    let chaining = &result.issues[0];
    assert_eq!(chaining.status, BaselineStatus::WidelyAvailable);
    assert_eq!(chaining.severity, Severity::Info);
    assert_eq!((chaining.line, chaining.column), (1, 12));
    assert_eq!(chaining.matched_text, "?.");

    let nullish = &result.issues[1];
    assert_eq!(nullish.column, 16);
    assert_eq!(nullish.severity, Severity::Info);
    assert_eq!(nullish.matched_text, "??");
    assert_eq!(nullish.source_line, "const x = a?.b ?? 'y';");
    let fix = nullish.quick_fix.as_ref().expect("nullish coalescing has a quick fix");
    assert_eq!(fix.replacement, "const x = a?.b || 'y';");

    // Two info issues, both high-adoption: round(0.8 + 0.8).
    assert_eq!(result.summary.risk_score, 2);
    assert_eq!(result.summary.compatibility_score, 98);
    assert_eq!(result.summary.risk_level, RiskLevel::Low);
    assert!(result.summary.unweighted_features.is_empty());
    assert!(result.suggestions.is_empty());
}

#[test]
fn css_has_is_a_warning_with_fallback() {
    let result = engine().analyze(".card:has(img){}", "css");

    assert_eq!(result.issues.len(), 1);
    let issue = &result.issues[0];
    assert_eq!(issue.feature_id, "css-has");
    assert_eq!(issue.severity, Severity::Warning);
    assert_eq!(issue.column, 6);
    assert!(issue.fallback.is_some());
    assert_eq!(issue.polyfill.as_deref(), Some("css-has-pseudo"));

    let enrichment = issue.enrichment.as_ref().unwrap();
    assert!(enrichment.community.is_some());

    assert_eq!(result.summary.risk_score, 5);
    assert_eq!(result.summary.compatibility_score, 95);
    assert_eq!(result.suggestions, ["1 features have a polyfill option"]);

    let perf = result.summary.performance.as_ref().unwrap();
    assert_eq!(perf.tier, ImpactTier::Minimal);
    assert!(!perf.recommend_lazy_loading);
    assert_eq!(perf.contributing_features, ["css-has"]);
}

#[test]
fn twenty_unsupported_lines_saturate_the_score() {
    let text = vec!["x |> f"; 20].join("\n");
    let result = engine().analyze(&text, "javascript");

    assert_eq!(result.summary.total, 20);
    assert_eq!(result.summary.severity_breakdown.error, 20);
    assert_eq!(result.summary.risk_score, 100);
    assert_eq!(result.summary.risk_level, RiskLevel::High);
    assert_eq!(result.summary.compatibility_score, 0);
    assert_eq!(result.summary.unweighted_features, ["pipeline-operator"]);
    assert_eq!(
        result.suggestions.first().map(String::as_str),
        Some("20 unsupported features may break in older browsers")
    );
    assert!(result.has_errors());
}

#[test]
fn same_feature_twice_on_a_line_is_one_issue() {
    let result = engine().analyze("a?.b?.c", "javascript");
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].column, 2);
}

#[test]
fn empty_input_is_fully_compatible() {
    let result = engine().analyze("", "javascript");
    assert!(result.issues.is_empty());
    assert_eq!(result.summary.total, 0);
    assert_eq!(result.summary.compatibility_score, 100);
    assert_eq!(result.summary.risk_level, RiskLevel::Low);
    assert!(result.summary.performance.is_none());
    assert!(result.suggestions.is_empty());
    assert_eq!(result.metadata.line_count, 0);
}

#[test]
fn no_match_is_not_an_error() {
    let result = engine().analyze("let total = 1 + 2;\nconsole.log(total);", "js");
    assert!(result.issues.is_empty());
    assert_eq!(result.summary.compatibility_score, 100);
    assert_eq!(result.metadata.line_count, 2);
}

#[test]
fn dated_features_follow_the_clock() {
    let at = |y, m, d| {
        CompatEngine::builder()
            .clock(FixedClock::at_date(y, m, d).unwrap())
            .build()
            .unwrap()
            .analyze("const copy = structuredClone(state);", "javascript")
    };

    let before = at(2021, 6, 1);
    assert_eq!(before.issues[0].status, BaselineStatus::Limited);
    assert_eq!(before.issues[0].severity, Severity::Warning);

    let newly = at(2023, 1, 1);
    assert_eq!(newly.issues[0].status, BaselineStatus::NewlyAvailable);

    let widely = at(2026, 10, 16);
    assert_eq!(widely.issues[0].status, BaselineStatus::WidelyAvailable);
    assert_eq!(widely.issues[0].severity, Severity::Info);
}

#[test]
fn language_hint_selects_feature_groups() {
    let engine = engine();
    assert!(engine.analyze("a?.b", "css").issues.is_empty());
    assert_eq!(engine.analyze("a?.b", "ts").issues.len(), 1);
    assert_eq!(engine.analyze("a?.b", "html").issues.len(), 1);
    assert_eq!(engine.analyze("a?.b", "cobol").issues.len(), 1);
    assert!(engine.analyze(".a:has(.b) {}", "javascript").issues.is_empty());

    assert_eq!(engine.analyze("x", "tsx").metadata.language, Language::Typescript);
    assert_eq!(engine.analyze("x", "cobol").metadata.language, Language::Unknown);
}

#[test]
fn markup_reports_all_embedded_groups() {
    let html = "<dialog open>\n<style>.a:has(.b) { color: red }</style>\n<script>a?.b</script>";
    let result = engine().analyze(html, "html");
    let ids: Vec<&str> = result.issues.iter().map(|i| i.feature_id.as_str()).collect();
    assert!(ids.contains(&"dialog-element"));
    assert!(ids.contains(&"css-has"));
    assert!(ids.contains(&"optional-chaining"));

    // Catalog order: javascript pack first, html pack last.
    assert_eq!(ids.first(), Some(&"optional-chaining"));
    assert_eq!(ids.last(), Some(&"dialog-element"));
}

#[test]
fn issues_are_in_catalog_then_line_order() {
    let text = "b ?? c\na?.b\nd ?? e\nf?.g";
    let result = engine().analyze(text, "javascript");
    let order: Vec<(&str, u32)> = result
        .issues
        .iter()
        .map(|i| (i.feature_id.as_str(), i.line))
        .collect();
    assert_eq!(
        order,
        [
            ("optional-chaining", 2),
            ("optional-chaining", 4),
            ("nullish-coalescing", 1),
            ("nullish-coalescing", 3),
        ]
    );
}

#[test]
fn crlf_lines_and_unicode_columns() {
    let result = engine().analyze("é = a?.b\r\nx ?? y\r\n", "javascript");
    assert_eq!(result.issues.len(), 2);
    assert_eq!(result.issues[0].column, 6);
    assert_eq!(result.issues[0].source_line, "é = a?.b");
    assert_eq!(result.issues[1].line, 2);
    assert_eq!(result.issues[1].source_line, "x ?? y");
    assert_eq!(result.metadata.line_count, 2);
}

#[test]
fn stray_carriage_returns_never_reach_issues() {
    let result = engine().analyze("const x = a ?? b\r", "javascript");
    let issue = &result.issues[0];
    assert_eq!(issue.source_line, "const x = a ?? b");
    assert_eq!(issue.quick_fix.as_ref().unwrap().replacement, "const x = a || b");

    let result = engine().analyze("x |> f\r\r\n", "javascript");
    assert_eq!(result.issues[0].source_line, "x |> f");
    assert_eq!(result.metadata.line_count, 1);
}

#[test]
fn final_newline_does_not_count_as_a_line() {
    assert_eq!(engine().analyze("a\n", "js").metadata.line_count, 1);
    assert_eq!(engine().analyze("a", "js").metadata.line_count, 1);
    assert_eq!(engine().analyze("a\n\n", "js").metadata.line_count, 2);
    assert_eq!(engine().analyze("", "js").metadata.line_count, 0);
}

#[test]
fn metadata_describes_the_input() {
    let engine = engine();
    let text = "héllo\nworld\n";
    let result = engine.analyze(text, "css");
    assert_eq!(result.metadata.timestamp, clock().now());
    assert_eq!(result.metadata.language, Language::Css);
    assert_eq!(result.metadata.line_count, 2);
    assert_eq!(result.metadata.character_count, 12);
    assert_eq!(result.metadata.catalog_size, engine.list_catalog().len());
}

#[test]
fn warnings_and_lazy_loading_suggestions() {
    let text = "const now = Temporal.Now.instant();\n\
                const parts = Object.groupBy(items, key);\n\
                const { promise } = Promise.withResolvers();";
    let result = engine().analyze(text, "javascript");

    assert_eq!(result.summary.severity_breakdown.warning, 3);
    assert_eq!(
        result.suggestions,
        [
            "3 newly available or limited features detected; verify them against your target browsers",
            "3 features have a polyfill option",
            "Polyfills add about 61.0 KB (high impact); consider lazy-loading them",
        ]
    );
    let perf = result.summary.performance.as_ref().unwrap();
    assert_eq!(perf.tier, ImpactTier::High);
    assert!(perf.recommend_lazy_loading);
}

#[test]
fn lazy_load_threshold_is_configurable() {
    let config = EngineConfig {
        lazy_load_threshold_kb: Some(100.0),
        ..EngineConfig::default()
    };
    let result = engine_with(config).analyze("Temporal.Now.instant()", "javascript");
    let perf = result.summary.performance.as_ref().unwrap();
    assert_eq!(perf.tier, ImpactTier::High);
    assert!(!perf.recommend_lazy_loading);
    assert!(result.suggestions.iter().all(|s| !s.contains("lazy-loading")));
}

fn low_adoption_pipeline() -> MapEnrichment {
    MapEnrichment::new().with_record(
        "pipeline-operator",
        EnrichmentRecord {
            usage: Some(UsageStats {
                adoption_percent: 10.0,
                trend: UsageTrend::Rising,
            }),
            ..EnrichmentRecord::default()
        },
    )
}

#[test]
fn low_adoption_raises_the_score() {
    let weighted = CompatEngine::builder()
        .clock(clock())
        .enrichment(low_adoption_pipeline())
        .build()
        .unwrap()
        .analyze("x |> f", "javascript");
    // 15 * 1.5 = 22.5, rounded half away from zero.
    assert_eq!(weighted.summary.risk_score, 23);
    assert_eq!(weighted.summary.risk_level, RiskLevel::Medium);
    assert!(weighted.summary.unweighted_features.is_empty());

    let config = EngineConfig {
        usage_weighting: Some(false),
        ..EngineConfig::default()
    };
    let flat = CompatEngine::builder()
        .clock(clock())
        .config(config)
        .enrichment(low_adoption_pipeline())
        .build()
        .unwrap()
        .analyze("x |> f", "javascript");
    assert_eq!(flat.summary.risk_score, 15);
    assert_eq!(flat.summary.risk_level, RiskLevel::Medium);
}

#[test]
fn enrichment_can_be_disabled() {
    let config = EngineConfig {
        enrichment: Some(false),
        ..EngineConfig::default()
    };
    let result = engine_with(config).analyze("const x = a?.b ?? 'y';", "javascript");
    assert!(result.issues.iter().all(|i| i.enrichment.is_none()));
    assert_eq!(
        result.summary.unweighted_features,
        ["optional-chaining", "nullish-coalescing"]
    );
    assert!(result.summary.performance.is_none());
    assert_eq!(result.summary.risk_score, 2);
}

#[test]
fn quick_fixes_can_be_disabled() {
    let config = EngineConfig {
        quick_fixes: Some(false),
        ..EngineConfig::default()
    };
    let result = engine_with(config).analyze("const c = structuredClone(s);", "javascript");
    assert_eq!(result.issues.len(), 1);
    assert!(result.issues[0].quick_fix.is_none());

    let result = engine().analyze("const c = structuredClone(s);", "javascript");
    assert_eq!(
        result.issues[0].quick_fix.as_ref().map(|f| f.replacement.as_str()),
        Some("const c = JSON.parse(JSON.stringify(s));")
    );
}

#[test]
fn disabled_features_are_not_reported() {
    let config = EngineConfig {
        disabled_features: vec!["nullish-coalescing".to_string()],
        ..EngineConfig::default()
    };
    let result = engine_with(config).analyze("const x = a?.b ?? 'y';", "javascript");
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].feature_id, "optional-chaining");
}

#[test]
fn analysis_is_idempotent() {
    let engine = engine();
    let text = "x |> f\n.card:has(img) {}\n<dialog open>";
    assert_eq!(engine.analyze(text, "html"), engine.analyze(text, "html"));
}

#[test]
fn batch_preserves_input_order() {
    let engine = engine();
    let inputs = [
        ("a?.b", "javascript"),
        ("", "css"),
        (".card:has(img){}", "css"),
        ("x |> f\ny |> g", "javascript"),
    ];
    let results = engine.analyze_batch(&inputs);

    assert_eq!(results.len(), inputs.len());
    for ((text, hint), result) in inputs.iter().zip(&results) {
        assert_eq!(result, &engine.analyze(text, hint));
    }

    let batch = BatchSummary::from_results(&results);
    assert_eq!(batch.inputs, 4);
    assert_eq!(batch.total_issues, 4);
    assert_eq!(batch.error_count, 2);
    assert_eq!(batch.max_risk_score, 30);
    // (99 + 100 + 95 + 70) / 4
    assert!((batch.average_compatibility - 91.0).abs() < 1e-9);
}

#[test]
fn empty_batch_summary() {
    let batch = BatchSummary::from_results(&[]);
    assert_eq!(batch.inputs, 0);
    assert_eq!(batch.average_compatibility, 100.0);
}

#[test]
fn engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompatEngine>();

    let engine = engine();
    let expected = engine.analyze("x |> f", "javascript");
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.analyze("x |> f", "javascript")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn result_serializes_to_snake_case_json() {
    let json = engine()
        .analyze(".card:has(img){}", "css")
        .to_json()
        .unwrap();
    assert!(json.contains("\"status\": \"newly-available\""));
    assert!(json.contains("\"severity\": \"warning\""));
    assert!(json.contains("\"compatibility_score\": 95"));
    assert!(json.contains("\"risk_level\": \"low\""));
}

struct DownSource;

impl CatalogSource for DownSource {
    fn name(&self) -> &str {
        "down"
    }

    fn fetch_packs(&self) -> Result<Vec<PackText>, CatalogError> {
        Err(CatalogError::SourceUnavailable {
            source_name: "down".to_string(),
            message: "timed out".to_string(),
        })
    }
}

#[test]
fn engine_survives_a_failing_catalog_source() {
    let engine = CompatEngine::builder()
        .clock(clock())
        .catalog_source(DownSource)
        .build()
        .unwrap();
    assert!(engine.catalog().diagnostics().used_fallback);
    assert_eq!(engine.analyze("a?.b", "js").issues.len(), 1);
}

#[test]
fn build_rejects_invalid_config() {
    let negative = EngineConfig {
        lazy_load_threshold_kb: Some(-1.0),
        ..EngineConfig::default()
    };
    let err = CompatEngine::with_config(negative).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)), "{err}");
    assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");

    let unknown_group = EngineConfig {
        disabled_groups: vec!["cobol".to_string()],
        ..EngineConfig::default()
    };
    let err = CompatEngine::builder()
        .config(unknown_group)
        .build()
        .unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");
}

#[test]
fn custom_pack_hints_never_hide_matches() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("loose.toml"),
        r#"
[pack]
name = "loose"
group = "javascript"

[[features]]
id = "fo-marker"
name = "Fo marker"
pattern = 'fo+'
hints = ["foo"]
status = "limited"
"#,
    )
    .unwrap();

    let config = EngineConfig {
        custom_packs_dir: Some(dir.path().to_path_buf()),
        ..EngineConfig::default()
    };
    let result = engine_with(config).analyze("let fo = 1;", "js");
    let ids: Vec<&str> = result.issues.iter().map(|i| i.feature_id.as_str()).collect();
    assert_eq!(ids, ["fo-marker"]);
    assert_eq!(result.issues[0].matched_text, "fo");
}
