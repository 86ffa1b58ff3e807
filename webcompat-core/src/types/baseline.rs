//! Baseline availability tiers and the severity derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Baseline availability tier of a web-platform feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaselineStatus {
    /// Interoperable across the core browser set for long enough to rely on.
    WidelyAvailable,
    /// Recently became interoperable across the core browser set.
    NewlyAvailable,
    /// Shipped in some engines but not all.
    Limited,
    /// No availability data at all.
    Unsupported,
}

impl BaselineStatus {
    pub const ALL: [BaselineStatus; 4] = [
        Self::WidelyAvailable,
        Self::NewlyAvailable,
        Self::Limited,
        Self::Unsupported,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WidelyAvailable => "widely-available",
            Self::NewlyAvailable => "newly-available",
            Self::Limited => "limited",
            Self::Unsupported => "unsupported",
        }
    }

    /// Parse a status from its kebab-case name. Underscores and the bare
    /// words "widely"/"newly" are accepted too.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "widely-available" | "widely" | "high" => Some(Self::WidelyAvailable),
            "newly-available" | "newly" | "low" => Some(Self::NewlyAvailable),
            "limited" => Some(Self::Limited),
            "unsupported" | "none" => Some(Self::Unsupported),
            _ => None,
        }
    }
}

impl fmt::Display for BaselineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Self::Error, Self::Warning, Self::Info];

    /// The fixed status → severity mapping. There is no per-call override.
    pub const fn for_status(status: BaselineStatus) -> Self {
        match status {
            BaselineStatus::WidelyAvailable => Self::Info,
            BaselineStatus::NewlyAvailable | BaselineStatus::Limited => Self::Warning,
            BaselineStatus::Unsupported => Self::Error,
        }
    }

    /// Risk points contributed by one occurrence of this severity.
    pub const fn base_score(&self) -> f64 {
        match self {
            Self::Error => 15.0,
            Self::Warning => 5.0,
            Self::Info => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
