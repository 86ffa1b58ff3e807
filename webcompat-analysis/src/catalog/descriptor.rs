//! Compiled feature descriptors: the validated, immutable catalog entries.

use chrono::NaiveDate;
use regex::{Match, Regex};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use webcompat_core::{BaselineStatus, FeatureGroup};

/// Where a feature's availability tier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Availability {
    /// A tier written directly into the catalog.
    Fixed { status: BaselineStatus },
    /// Derived from the baseline dates relative to "today".
    Dated {
        low: NaiveDate,
        high: Option<NaiveDate>,
    },
    /// No availability data at all.
    Unknown,
}

impl Availability {
    /// Tier on the given day. A date that is reached counts as passed.
    pub fn status_on(&self, today: NaiveDate) -> BaselineStatus {
        match *self {
            Self::Fixed { status } => status,
            Self::Dated { low, high } => {
                if high.is_some_and(|h| h <= today) {
                    BaselineStatus::WidelyAvailable
                } else if low <= today {
                    BaselineStatus::NewlyAvailable
                } else {
                    BaselineStatus::Limited
                }
            }
            Self::Unknown => BaselineStatus::Unsupported,
        }
    }
}

/// Capture group that narrows the reported span to part of the match.
pub const HIT_GROUP: &str = "hit";

/// Minimum version a browser supports a feature from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportVersion {
    Since(String),
    Unsupported,
}

impl SupportVersion {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("false") {
            Self::Unsupported
        } else {
            Self::Since(raw.to_string())
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Since(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserSupport {
    pub browser: String,
    pub version: SupportVersion,
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_regex")]
    pub pattern: Regex,
    /// Literals every match contains. Empty for packs the engine does not
    /// ship, which are never prefiltered.
    #[serde(skip)]
    pub hints: Vec<String>,
    /// The pattern defines a `(?P<hit>...)` group.
    #[serde(skip)]
    pub has_hit_group: bool,
    pub group: FeatureGroup,
    pub availability: Availability,
    pub browser_support: SmallVec<[BrowserSupport; 4]>,
    pub fallback: Option<String>,
    pub polyfill: Option<String>,
    pub documentation_url: Option<String>,
    pub spec_url: Option<String>,
    /// Name of the pack this entry was loaded from.
    pub pack: String,
}

impl FeatureDescriptor {
    pub fn support_for(&self, browser: &str) -> Option<&SupportVersion> {
        self.browser_support
            .iter()
            .find(|b| b.browser.eq_ignore_ascii_case(browser))
            .map(|b| &b.version)
    }

    /// First match on `line`. When the pattern has a `hit` group that took
    /// part in the match, the group is the reported span.
    pub fn find_in<'h>(&self, line: &'h str) -> Option<Match<'h>> {
        if !self.has_hit_group {
            return self.pattern.find(line);
        }
        let caps = self.pattern.captures(line)?;
        caps.name(HIT_GROUP).or_else(|| caps.get(0))
    }

    pub fn has_polyfill(&self) -> bool {
        self.polyfill.as_deref().is_some_and(|p| !p.trim().is_empty())
    }
}

fn serialize_regex<S: Serializer>(re: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(re.as_str())
}
