//! `CompatEngine`: catalog + clock + enrichment + scorer behind one call.

use std::sync::Arc;

use rayon::prelude::*;

use webcompat_core::errors::{CommunityError, EngineError};
use webcompat_core::{BaselineStatus, Clock, EngineConfig, Language, SystemClock};

use super::types::{AnalysisMetadata, AnalysisResult, Issue};
use crate::catalog::{Catalog, CatalogSource, FeatureDescriptor};
use crate::classifier::Classifier;
use crate::community::{self, FeatureRequest, FeatureRequestReceipt, VoteAck, VoteDirection};
use crate::enrichment::{EnrichmentProvider, StaticEnrichment};
use crate::fixes::QuickFixGenerator;
use crate::matcher::{self, RawMatch};
use crate::scoring::{build_suggestions, Scorer};

/// The feature-detection engine. Built once; `analyze` takes `&self` and
/// shares the read-only catalog across threads.
pub struct CompatEngine {
    catalog: Catalog,
    clock: Arc<dyn Clock>,
    enrichment: Option<Arc<dyn EnrichmentProvider>>,
    scorer: Scorer,
    fixes: Option<QuickFixGenerator>,
}

impl CompatEngine {
    /// Built-in catalog, wall clock, embedded enrichment, default scoring.
    pub fn new() -> Result<Self, EngineError> {
        Self::builder().build()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> CompatEngineBuilder {
        CompatEngineBuilder::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list_catalog(&self) -> &[FeatureDescriptor] {
        self.catalog.features()
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Scan `source_text` for catalog features. `language_hint` is a language
    /// name or file extension; unknown hints scan every feature group.
    pub fn analyze(&self, source_text: &str, language_hint: &str) -> AnalysisResult {
        let language = Language::from_hint(language_hint);
        let classifier = Classifier::new(self.clock.as_ref());
        let lines = matcher::split_lines(source_text);

        let issues: Vec<Issue> = matcher::match_lines(&lines, &self.catalog, language)
            .into_iter()
            .map(|m| self.build_issue(m, &classifier, &lines))
            .collect();

        let summary = self.scorer.score(&issues);
        let suggestions = build_suggestions(&issues, &summary);

        tracing::debug!(
            language = %language,
            lines = lines.len(),
            issues = issues.len(),
            risk_score = summary.risk_score,
            "analysis complete"
        );

        AnalysisResult {
            issues,
            summary,
            suggestions,
            metadata: AnalysisMetadata {
                timestamp: self.clock.now(),
                language,
                line_count: lines.len(),
                character_count: source_text.chars().count(),
                catalog_size: self.catalog.len(),
            },
        }
    }

    /// Analyse independent `(text, hint)` inputs in parallel. Results are in
    /// input order.
    pub fn analyze_batch(&self, inputs: &[(&str, &str)]) -> Vec<AnalysisResult> {
        inputs
            .par_iter()
            .map(|(text, hint)| self.analyze(text, hint))
            .collect()
    }

    pub fn submit_feature_request(
        &self,
        request: &FeatureRequest,
    ) -> Result<FeatureRequestReceipt, CommunityError> {
        community::submit_feature_request(&self.catalog, request)
    }

    pub fn vote_on_feature(
        &self,
        feature_id: &str,
        direction: VoteDirection,
    ) -> Result<VoteAck, CommunityError> {
        community::vote_on_feature(&self.catalog, feature_id, direction)
    }

    fn build_issue(&self, m: RawMatch, classifier: &Classifier, lines: &[&str]) -> Issue {
        let feature = &self.catalog.features()[m.feature_index];
        let classification = classifier.classify(feature);

        let enrichment = self
            .enrichment
            .as_ref()
            .and_then(|p| p.lookup(&feature.id))
            .filter(|r| !r.is_empty());

        let quick_fix = self.fixes.as_ref().and_then(|fixes| {
            let line = lines.get(m.line as usize - 1).copied().unwrap_or(&m.source_line);
            fixes.suggest(&feature.id, line)
        });

        Issue {
            feature_id: feature.id.clone(),
            feature_name: feature.name.clone(),
            group: feature.group,
            line: m.line,
            column: m.column,
            matched_text: m.matched_text,
            source_line: m.source_line,
            status: classification.status,
            severity: classification.severity,
            message: issue_message(&feature.name, classification.status),
            fallback: feature.fallback.clone(),
            polyfill: feature.polyfill.clone(),
            documentation_url: feature.documentation_url.clone(),
            spec_url: feature.spec_url.clone(),
            enrichment,
            quick_fix,
        }
    }
}

impl std::fmt::Debug for CompatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompatEngine")
            .field("features", &self.catalog.len())
            .field("enrichment", &self.enrichment.is_some())
            .field("scorer", &self.scorer)
            .field("quick_fixes", &self.fixes.is_some())
            .finish()
    }
}

fn issue_message(name: &str, status: BaselineStatus) -> String {
    match status {
        BaselineStatus::WidelyAvailable => format!("{name} is widely available"),
        BaselineStatus::NewlyAvailable => {
            format!("{name} is newly available; older browsers may lack it")
        }
        BaselineStatus::Limited => format!("{name} has limited browser availability"),
        BaselineStatus::Unsupported => format!("{name} is not supported across browsers"),
    }
}

/// Assembles a `CompatEngine`. Catalog precedence: an explicit catalog, then
/// a catalog source (with embedded fallback), then the built-in packs.
#[derive(Default)]
pub struct CompatEngineBuilder {
    config: EngineConfig,
    clock: Option<Arc<dyn Clock>>,
    enrichment: Option<Arc<dyn EnrichmentProvider>>,
    catalog: Option<Catalog>,
    catalog_source: Option<Box<dyn CatalogSource>>,
}

impl CompatEngineBuilder {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Replace the embedded enrichment tables. Ignored when the config
    /// disables enrichment.
    pub fn enrichment(mut self, provider: impl EnrichmentProvider + 'static) -> Self {
        self.enrichment = Some(Arc::new(provider));
        self
    }

    /// Use this catalog as-is; config filters are not re-applied.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn catalog_source(mut self, source: impl CatalogSource + 'static) -> Self {
        self.catalog_source = Some(Box::new(source));
        self
    }

    /// Validate the config, then load the catalog.
    pub fn build(self) -> Result<CompatEngine, EngineError> {
        let config = self.config;
        config.validate()?;

        let catalog = match (self.catalog, self.catalog_source) {
            (Some(catalog), _) => catalog,
            (None, Some(source)) => Catalog::load_from_source(source.as_ref())?.configured(&config),
            (None, None) => Catalog::load_with_config(&config)?,
        };

        let enrichment = if config.effective_enrichment() {
            Some(self.enrichment.unwrap_or_else(|| {
                Arc::new(StaticEnrichment::new()) as Arc<dyn EnrichmentProvider>
            }))
        } else {
            None
        };

        let fixes = config
            .effective_quick_fixes()
            .then(QuickFixGenerator::new);

        Ok(CompatEngine {
            catalog,
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>),
            enrichment,
            scorer: Scorer::from_config(&config),
            fixes,
        })
    }
}
