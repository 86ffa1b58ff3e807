//! The feature catalog: built-in packs plus optional custom packs.
//!
//! Built-in packs are embedded at compile time via `include_str!`.
//! Custom packs are loaded from a directory at runtime. Once built, a
//! `Catalog` is never mutated; filtering produces a new one.

use std::path::Path;

use aho_corasick::AhoCorasick;

use webcompat_core::errors::CatalogError;
use webcompat_core::{EngineConfig, FeatureGroup, FxHashMap};

use super::descriptor::FeatureDescriptor;
use super::diagnostics::CatalogDiagnostics;
use super::loader::{self, CompiledPack, LoadMode};
use super::source::{CatalogSource, DirectorySource};

/// Built-in feature packs embedded at compile time.
fn builtin_packs() -> [(&'static str, &'static str); 3] {
    [
        ("javascript", include_str!("packs/javascript.toml")),
        ("css", include_str!("packs/css.toml")),
        ("html", include_str!("packs/html.toml")),
    ]
}

/// Immutable, validated collection of feature descriptors.
#[derive(Debug, Clone)]
pub struct Catalog {
    features: Vec<FeatureDescriptor>,
    index: FxHashMap<String, usize>,
    hints: HintIndex,
    diag: CatalogDiagnostics,
}

impl Catalog {
    /// Build the catalog from the embedded packs. Any defect in them is fatal.
    pub fn load() -> Result<Self, CatalogError> {
        let mut builder = CatalogBuilder::default();
        for (name, toml_str) in builtin_packs() {
            let pack = loader::load_from_str(name, toml_str, LoadMode::Strict)?;
            builder.add_pack(pack, LoadMode::Strict)?;
            builder.diag.builtin_packs_loaded += 1;
        }
        let catalog = builder.finish();
        tracing::debug!(features = catalog.len(), "built-in catalog loaded");
        Ok(catalog)
    }

    /// Built-in packs, then the configured custom packs, then the configured
    /// feature/group filters.
    pub fn load_with_config(config: &EngineConfig) -> Result<Self, CatalogError> {
        let catalog = Self::load()?.configured(config);
        tracing::info!("{}", catalog.diag.summary());
        Ok(catalog)
    }

    /// Apply the custom pack directory and the disabled ids/groups of `config`.
    pub fn configured(self, config: &EngineConfig) -> Self {
        let mut catalog = self;
        if let Some(dir) = config.custom_packs_dir.as_deref() {
            catalog = catalog.with_custom_packs(dir);
        }
        let groups = config.disabled_group_set();
        if !config.disabled_features.is_empty() || !groups.is_empty() {
            catalog = catalog.without(&config.disabled_features, &groups);
        }
        catalog
    }

    /// Build from an external source, falling back to the embedded packs if
    /// the source fails or serves invalid data. Only a defect in the
    /// embedded packs is returned as an error. Hints served by the source
    /// are ignored.
    pub fn load_from_source(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        match Self::compile_source(source) {
            Ok(catalog) => {
                tracing::info!(source = source.name(), "{}", catalog.diag.summary());
                Ok(catalog)
            }
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    error = %e,
                    "catalog source failed, using embedded feature packs"
                );
                let mut catalog = Self::load()?;
                catalog.diag.used_fallback = true;
                Ok(catalog)
            }
        }
    }

    /// Build strictly from the given `(name, toml)` packs, in order. The
    /// caller vouches for the packs, so their hints drive the prefilter.
    pub fn from_packs(packs: &[(&str, &str)]) -> Result<Self, CatalogError> {
        let mut builder = CatalogBuilder::default();
        for (name, toml_str) in packs {
            let pack = loader::load_from_str(name, toml_str, LoadMode::Strict)?;
            builder.add_pack(pack, LoadMode::Strict)?;
            builder.diag.source_packs_loaded += 1;
        }
        Ok(builder.finish())
    }

    fn compile_source(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let packs = source.fetch_packs()?;
        let mut builder = CatalogBuilder::default();
        for text in packs {
            let pack = loader::load_from_str(&text.name, &text.toml, LoadMode::Strict)?
                .without_hints();
            builder.add_pack(pack, LoadMode::Strict)?;
            builder.diag.source_packs_loaded += 1;
        }
        if builder.features.is_empty() {
            return Err(CatalogError::SourceUnavailable {
                source_name: source.name().to_string(),
                message: "source produced no features".to_string(),
            });
        }
        Ok(builder.finish())
    }

    /// Merge every `*.toml` pack in `dir`. Unreadable or invalid packs and
    /// entries whose id is already taken are logged and skipped. Hints in
    /// these packs are ignored.
    pub fn with_custom_packs(self, dir: &Path) -> Self {
        let source = DirectorySource::new(dir);
        let paths = match source.pack_paths() {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "custom pack directory unreadable");
                return self;
            }
        };

        let mut builder = CatalogBuilder::from_catalog(self);
        for path in paths {
            match loader::load_from_file(&path, LoadMode::Lenient) {
                Ok(pack) => {
                    // Lenient mode never fails on duplicates.
                    let _ = builder.add_pack(pack.without_hints(), LoadMode::Lenient);
                    builder.diag.custom_packs_loaded += 1;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load custom pack");
                    builder.diag.custom_packs_skipped += 1;
                }
            }
        }
        builder.finish()
    }

    /// A copy without the given feature ids and groups.
    pub fn without(self, feature_ids: &[String], groups: &[FeatureGroup]) -> Self {
        let mut builder = CatalogBuilder::from_catalog(self);
        let before = builder.features.len();
        builder
            .features
            .retain(|f| !feature_ids.contains(&f.id) && !groups.contains(&f.group));
        builder.diag.features_disabled += before - builder.features.len();
        builder.finish()
    }

    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    pub fn get(&self, id: &str) -> Option<&FeatureDescriptor> {
        self.index.get(id).map(|&i| &self.features[i])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn diagnostics(&self) -> &CatalogDiagnostics {
        &self.diag
    }

    /// Per-feature flag (catalog order): could this feature match anywhere in
    /// `text`? Features without hints are always candidates.
    pub fn candidates(&self, text: &str) -> Vec<bool> {
        self.hints.candidates(&self.features, &[text])
    }

    /// `candidates` over text already split into lines.
    pub fn candidates_in(&self, lines: &[&str]) -> Vec<bool> {
        self.hints.candidates(&self.features, lines)
    }
}

#[derive(Default)]
struct CatalogBuilder {
    features: Vec<FeatureDescriptor>,
    index: FxHashMap<String, usize>,
    diag: CatalogDiagnostics,
}

impl CatalogBuilder {
    fn from_catalog(catalog: Catalog) -> Self {
        Self {
            features: catalog.features,
            index: catalog.index,
            diag: catalog.diag,
        }
    }

    fn add_pack(&mut self, pack: CompiledPack, mode: LoadMode) -> Result<(), CatalogError> {
        self.diag.features_skipped += pack.skipped;
        if let Some(version) = pack.version {
            self.diag.pack_versions.insert(pack.name.clone(), version);
        }
        for feature in pack.features {
            if let Some(&existing) = self.index.get(&feature.id) {
                let err = CatalogError::DuplicateId {
                    feature_id: feature.id.clone(),
                    first_pack: self.features[existing].pack.clone(),
                };
                if mode == LoadMode::Strict {
                    return Err(err);
                }
                tracing::warn!(pack = %pack.name, error = %err, "skipping duplicate feature");
                self.diag.features_skipped += 1;
                continue;
            }
            self.index.insert(feature.id.clone(), self.features.len());
            self.features.push(feature);
        }
        Ok(())
    }

    fn finish(mut self) -> Catalog {
        // Re-index: filtering may have shifted positions.
        self.index = self
            .features
            .iter()
            .enumerate()
            .map(|(i, f)| (f.id.clone(), i))
            .collect();
        self.diag.features_loaded = self.features.len();
        let hints = HintIndex::build(&self.features);
        Catalog {
            features: self.features,
            index: self.index,
            hints,
            diag: self.diag,
        }
    }
}

/// Aho-Corasick automaton over every feature's hint literals.
#[derive(Debug, Clone, Default)]
struct HintIndex {
    automaton: Option<AhoCorasick>,
    /// Hint index → feature index.
    owners: Vec<usize>,
}

impl HintIndex {
    fn build(features: &[FeatureDescriptor]) -> Self {
        let mut literals = Vec::new();
        let mut owners = Vec::new();
        for (i, feature) in features.iter().enumerate() {
            for hint in &feature.hints {
                literals.push(hint.as_str());
                owners.push(i);
            }
        }
        if literals.is_empty() {
            return Self::default();
        }
        match AhoCorasick::builder().ascii_case_insensitive(true).build(&literals) {
            Ok(automaton) => Self {
                automaton: Some(automaton),
                owners,
            },
            Err(e) => {
                // Without the automaton every feature is scanned.
                tracing::warn!(error = %e, "hint automaton build failed, prefilter disabled");
                Self::default()
            }
        }
    }

    fn candidates(&self, features: &[FeatureDescriptor], haystacks: &[&str]) -> Vec<bool> {
        let Some(automaton) = &self.automaton else {
            return vec![true; features.len()];
        };
        let mut out: Vec<bool> = features.iter().map(|f| f.hints.is_empty()).collect();
        for haystack in haystacks {
            for m in automaton.find_overlapping_iter(*haystack) {
                if let Some(&owner) = self.owners.get(m.pattern().as_usize()) {
                    out[owner] = true;
                }
            }
        }
        out
    }
}
