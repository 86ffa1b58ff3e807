//! Catalog load diagnostics.

use std::collections::BTreeMap;

/// Counters describing how the catalog was assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDiagnostics {
    pub builtin_packs_loaded: usize,
    pub custom_packs_loaded: usize,
    pub custom_packs_skipped: usize,
    pub source_packs_loaded: usize,
    pub features_loaded: usize,
    pub features_skipped: usize,
    pub features_disabled: usize,
    /// Set when an external source failed and the embedded packs were used.
    pub used_fallback: bool,
    pub pack_versions: BTreeMap<String, String>,
}

impl CatalogDiagnostics {
    pub fn summary(&self) -> String {
        format!(
            "[webcompat] catalog: {} features ({} builtin packs, {} custom, {} from source), \
             {} skipped, {} disabled{}",
            self.features_loaded,
            self.builtin_packs_loaded,
            self.custom_packs_loaded,
            self.source_packs_loaded,
            self.features_skipped,
            self.features_disabled,
            if self.used_fallback { ", embedded fallback" } else { "" },
        )
    }
}
