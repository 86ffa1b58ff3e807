//! Source languages and the feature groups each one can contain.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical tag of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureGroup {
    Javascript,
    Css,
    Html,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 3] = [Self::Javascript, Self::Css, Self::Html];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Css => "css",
            Self::Html => "html",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Some(Self::Javascript),
            "css" => Some(Self::Css),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the text handed to the engine, resolved from a caller hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Css,
    Html,
    Unknown,
}

impl Language {
    /// Resolve a language name or file extension (with or without the dot).
    /// Anything unrecognised is `Unknown`, which scans every group.
    pub fn from_hint(hint: &str) -> Self {
        let hint = hint.trim().trim_start_matches('.').to_ascii_lowercase();
        match hint.as_str() {
            "javascript" | "js" | "mjs" | "cjs" | "jsx" | "javascriptreact" => Self::Javascript,
            "typescript" | "ts" | "mts" | "cts" | "tsx" | "typescriptreact" => Self::Typescript,
            "css" | "scss" | "sass" | "less" | "postcss" => Self::Css,
            "html" | "htm" | "xhtml" | "vue" | "svelte" => Self::Html,
            _ => Self::Unknown,
        }
    }

    /// Feature groups worth scanning for this language. Markup embeds both
    /// scripts and styles.
    pub fn groups(&self) -> &'static [FeatureGroup] {
        match self {
            Self::Javascript | Self::Typescript => &[FeatureGroup::Javascript],
            Self::Css => &[FeatureGroup::Css],
            Self::Html | Self::Unknown => &FeatureGroup::ALL,
        }
    }

    pub fn scans(&self, group: FeatureGroup) -> bool {
        self.groups().contains(&group)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Css => "css",
            Self::Html => "html",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
