//! Quick fixes: textual line rewrites for a couple of features.
//!
//! These are plain regex substitutions over one source line, not code
//! transformations. Each rewrite changes semantics slightly, which the
//! description states.

use regex::Regex;
use serde::Serialize;

/// A suggested rewrite of the matched line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickFix {
    pub description: String,
    /// The full source line with the substitution applied.
    pub replacement: String,
}

struct FixRule {
    feature_id: &'static str,
    pattern: &'static str,
    replacement: &'static str,
    /// Lines containing this text are left alone.
    skip_if_contains: Option<&'static str>,
    description: &'static str,
}

static FIX_RULES: &[FixRule] = &[
    FixRule {
        feature_id: "nullish-coalescing",
        pattern: r"\?\?([^=?]|$)",
        replacement: "||${1}",
        skip_if_contains: Some("??="),
        description: "Replace `??` with `||`; note that `||` also falls back on 0, \"\" and false",
    },
    FixRule {
        feature_id: "structured-clone",
        pattern: r"structuredClone\(([^()]*)\)",
        replacement: "JSON.parse(JSON.stringify(${1}))",
        skip_if_contains: None,
        description: "Replace structuredClone with a JSON round-trip; functions are dropped and Dates become strings",
    },
];

pub struct QuickFixGenerator {
    rules: Vec<(&'static FixRule, Regex)>,
}

impl QuickFixGenerator {
    pub fn new() -> Self {
        let rules = FIX_RULES
            .iter()
            .filter_map(|rule| Regex::new(rule.pattern).ok().map(|re| (rule, re)))
            .collect();
        Self { rules }
    }

    /// Feature ids this generator can fix.
    pub fn supported_features(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(rule, _)| rule.feature_id)
    }

    /// Rewrite `line` for `feature_id`, if a rule exists and applies.
    pub fn suggest(&self, feature_id: &str, line: &str) -> Option<QuickFix> {
        let (rule, re) = self.rules.iter().find(|(rule, _)| rule.feature_id == feature_id)?;
        if rule.skip_if_contains.is_some_and(|needle| line.contains(needle)) {
            return None;
        }
        let rewritten = re.replace_all(line, rule.replacement);
        if rewritten == line {
            return None;
        }
        Some(QuickFix {
            description: rule.description.to_string(),
            replacement: rewritten.into_owned(),
        })
    }
}

impl Default for QuickFixGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QuickFixGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickFixGenerator")
            .field("rules", &self.rules.len())
            .finish()
    }
}
