//! Feature pack loader: parses TOML and compiles every entry into a
//! [`FeatureDescriptor`].
//!
//! All validation happens here, once. Downstream code never re-checks
//! optional fields or pattern validity.

use std::path::Path;

use regex::Regex;
use smallvec::SmallVec;

use webcompat_core::errors::CatalogError;
use webcompat_core::{BaselineStatus, FeatureGroup};

use super::descriptor::{
    Availability, BrowserSupport, FeatureDescriptor, SupportVersion, HIT_GROUP,
};
use super::types::{FeatureDef, FeaturePackSpec};

/// Longest pattern accepted, in bytes.
const MAX_PATTERN_LEN: usize = 1024;

/// How a pack reacts to a bad entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Any bad entry fails the whole pack (built-in packs).
    Strict,
    /// Bad entries are logged and skipped (custom packs).
    Lenient,
}

/// A compiled pack ready to be merged into a catalog.
#[derive(Debug, Clone)]
pub struct CompiledPack {
    pub name: String,
    pub group: FeatureGroup,
    pub version: Option<String>,
    pub features: Vec<FeatureDescriptor>,
    /// Entries dropped in lenient mode.
    pub skipped: usize,
}

impl CompiledPack {
    /// Clear every entry's hint literals so its pattern runs on every line.
    /// Hints are not checked against the pattern, so only packs shipped with
    /// the engine keep them.
    pub fn without_hints(mut self) -> Self {
        let mut cleared = 0;
        for feature in &mut self.features {
            if !feature.hints.is_empty() {
                feature.hints.clear();
                cleared += 1;
            }
        }
        if cleared > 0 {
            tracing::debug!(pack = %self.name, features = cleared, "ignoring hints of external pack");
        }
        self
    }
}

/// Parse and compile a pack from a TOML string.
pub fn load_from_str(
    source_name: &str,
    toml_str: &str,
    mode: LoadMode,
) -> Result<CompiledPack, CatalogError> {
    let spec: FeaturePackSpec = toml::from_str(toml_str).map_err(|e| CatalogError::Parse {
        pack: source_name.to_string(),
        message: e.to_string(),
    })?;
    compile_spec(spec, mode)
}

/// Read, parse and compile a pack file.
pub fn load_from_file(path: &Path, mode: LoadMode) -> Result<CompiledPack, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_from_str(&path.display().to_string(), &content, mode)
}

fn compile_spec(spec: FeaturePackSpec, mode: LoadMode) -> Result<CompiledPack, CatalogError> {
    let pack_name = spec.pack.name;
    let group = FeatureGroup::parse_str(&spec.pack.group).ok_or_else(|| CatalogError::Parse {
        pack: pack_name.clone(),
        message: format!("unknown pack group '{}'", spec.pack.group),
    })?;

    let mut features = Vec::with_capacity(spec.features.len());
    let mut skipped = 0;
    for def in spec.features {
        match compile_feature(def, group, &pack_name) {
            Ok(feature) => features.push(feature),
            Err(e) if mode == LoadMode::Lenient => {
                tracing::warn!(pack = %pack_name, error = %e, "skipping feature in pack");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(CompiledPack {
        name: pack_name,
        group,
        version: spec.pack.version,
        features,
        skipped,
    })
}

/// Compile one entry. `pack_group` applies when the entry has no group.
pub fn compile_feature(
    def: FeatureDef,
    pack_group: FeatureGroup,
    pack_name: &str,
) -> Result<FeatureDescriptor, CatalogError> {
    if def.id.trim().is_empty() {
        return Err(CatalogError::Parse {
            pack: pack_name.to_string(),
            message: format!("feature '{}' has an empty id", def.name),
        });
    }

    let pattern = compile_pattern(&def.id, &def.pattern)?;
    let availability = compile_availability(&def)?;

    let group = match def.group.as_deref() {
        Some(g) => FeatureGroup::parse_str(g).ok_or_else(|| CatalogError::Parse {
            pack: pack_name.to_string(),
            message: format!("unknown group '{g}' on feature '{}'", def.id),
        })?,
        None => pack_group,
    };

    if let Some(empty) = def.hints.iter().find(|h| h.is_empty()) {
        return Err(CatalogError::InvalidPattern {
            feature_id: def.id.clone(),
            message: format!("empty hint literal {empty:?}"),
        });
    }

    let browser_support: SmallVec<[BrowserSupport; 4]> = def
        .browser_support
        .iter()
        .map(|(browser, version)| BrowserSupport {
            browser: browser.clone(),
            version: SupportVersion::parse(version),
        })
        .collect();

    let has_hit_group = pattern.capture_names().flatten().any(|n| n == HIT_GROUP);

    Ok(FeatureDescriptor {
        id: def.id,
        name: def.name,
        description: def.description,
        pattern,
        hints: def.hints,
        has_hit_group,
        group,
        availability,
        browser_support,
        fallback: non_empty(def.fallback),
        polyfill: non_empty(def.polyfill),
        documentation_url: non_empty(def.documentation_url),
        spec_url: non_empty(def.spec_url),
        pack: pack_name.to_string(),
    })
}

fn compile_pattern(feature_id: &str, pattern: &str) -> Result<Regex, CatalogError> {
    if pattern.is_empty() || pattern.len() > MAX_PATTERN_LEN {
        return Err(CatalogError::InvalidPattern {
            feature_id: feature_id.to_string(),
            message: format!("pattern length {} outside 1..={MAX_PATTERN_LEN}", pattern.len()),
        });
    }
    let re = Regex::new(pattern).map_err(|e| CatalogError::InvalidPattern {
        feature_id: feature_id.to_string(),
        message: e.to_string(),
    })?;
    // A pattern that matches nothing would report every line.
    if re.is_match("") {
        return Err(CatalogError::InvalidPattern {
            feature_id: feature_id.to_string(),
            message: "pattern matches the empty string".to_string(),
        });
    }
    Ok(re)
}

fn compile_availability(def: &FeatureDef) -> Result<Availability, CatalogError> {
    let invalid = |message: String| CatalogError::InvalidAvailability {
        feature_id: def.id.clone(),
        message,
    };

    match (def.status.as_deref(), def.baseline_low_date, def.baseline_high_date) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(invalid(
            "set either `status` or baseline dates, not both".to_string(),
        )),
        (Some(raw), None, None) => BaselineStatus::parse_str(raw)
            .map(|status| Availability::Fixed { status })
            .ok_or_else(|| invalid(format!("unknown status '{raw}'"))),
        (None, Some(low), high) => {
            if let Some(high) = high {
                if high < low {
                    return Err(invalid(format!(
                        "baseline_high_date {high} is before baseline_low_date {low}"
                    )));
                }
            }
            Ok(Availability::Dated { low, high })
        }
        (None, None, Some(_)) => Err(invalid(
            "baseline_high_date requires baseline_low_date".to_string(),
        )),
        (None, None, None) => Ok(Availability::Unknown),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
