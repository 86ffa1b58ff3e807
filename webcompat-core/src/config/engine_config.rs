//! Engine configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::language::FeatureGroup;

/// Default size above which lazy-loading polyfills is recommended.
pub const DEFAULT_LAZY_LOAD_THRESHOLD_KB: f64 = 30.0;

/// Configuration for the analysis engine. Every field is optional; the
/// `effective_*` accessors apply the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Feature ids removed from the catalog after loading.
    pub disabled_features: Vec<String>,
    /// Feature groups removed from the catalog after loading ("css", ...).
    pub disabled_groups: Vec<String>,
    /// Directory of additional `*.toml` feature packs.
    pub custom_packs_dir: Option<PathBuf>,
    /// Attach usage/community/performance annotations. Default: true.
    pub enrichment: Option<bool>,
    /// Scale risk by feature adoption when usage data exists. Default: true.
    pub usage_weighting: Option<bool>,
    /// Bundle-size threshold for the lazy-loading suggestion. Default: 30 KB.
    pub lazy_load_threshold_kb: Option<f64>,
    /// Attach textual quick fixes to issues. Default: true.
    pub quick_fixes: Option<bool>,
}

impl EngineConfig {
    /// Parse from a TOML string. An `[engine]` table is accepted as well as
    /// top-level keys.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = toml::from_str(s).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        let value = match table.remove("engine") {
            Some(engine) => engine,
            None => toml::Value::Table(table),
        };
        let config: EngineConfig = value.try_into().map_err(|e: toml::de::Error| {
            ConfigError::Parse {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject values the engine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for group in &self.disabled_groups {
            if FeatureGroup::parse_str(group).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "disabled_groups".to_string(),
                    message: format!("unknown feature group '{group}'"),
                });
            }
        }
        if let Some(kb) = self.lazy_load_threshold_kb {
            if !kb.is_finite() || kb < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "lazy_load_threshold_kb".to_string(),
                    message: format!("must be a non-negative number, got {kb}"),
                });
            }
        }
        Ok(())
    }

    pub fn effective_enrichment(&self) -> bool {
        self.enrichment.unwrap_or(true)
    }

    pub fn effective_usage_weighting(&self) -> bool {
        self.usage_weighting.unwrap_or(true)
    }

    pub fn effective_lazy_load_threshold_kb(&self) -> f64 {
        self.lazy_load_threshold_kb
            .unwrap_or(DEFAULT_LAZY_LOAD_THRESHOLD_KB)
    }

    pub fn effective_quick_fixes(&self) -> bool {
        self.quick_fixes.unwrap_or(true)
    }

    /// Disabled groups as typed values. Unknown names were rejected by
    /// `validate`, so they are simply skipped here.
    pub fn disabled_group_set(&self) -> Vec<FeatureGroup> {
        self.disabled_groups
            .iter()
            .filter_map(|g| FeatureGroup::parse_str(g))
            .collect()
    }
}
