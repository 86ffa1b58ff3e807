//! Serde types for feature packs.
//!
//! These define the TOML schema of the built-in packs under `packs/` and of
//! any custom pack a user drops into the configured packs directory.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level feature pack (one per TOML file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturePackSpec {
    pub pack: PackMeta,
    #[serde(default)]
    pub features: Vec<FeatureDef>,
}

/// Pack metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackMeta {
    /// Unique pack name (e.g. "css").
    pub name: String,
    /// Default group for features that do not set their own.
    pub group: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// A single feature entry as written in TOML. Availability is either a fixed
/// `status` or a pair of baseline dates; leaving both out marks the feature
/// unsupported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Regex matched against one source line.
    pub pattern: String,
    /// Literals that every match contains, used to skip the regex entirely.
    #[serde(default)]
    pub hints: Vec<String>,
    /// Overrides the pack group.
    pub group: Option<String>,
    pub status: Option<String>,
    pub baseline_low_date: Option<NaiveDate>,
    pub baseline_high_date: Option<NaiveDate>,
    /// Browser → minimum version, or "none".
    #[serde(default)]
    pub browser_support: BTreeMap<String, String>,
    pub fallback: Option<String>,
    pub polyfill: Option<String>,
    pub documentation_url: Option<String>,
    pub spec_url: Option<String>,
}
