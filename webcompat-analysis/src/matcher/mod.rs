//! Line matcher: runs every catalog pattern over every line.
//!
//! One non-global match per feature per line. A feature that appears twice
//! on the same line produces a single occurrence. Output order is catalog
//! order, then line order.
//!
//! Lines come from [`split_lines`]. Callers that also need the lines (the
//! engine does, for quick fixes) split once and use [`match_lines`].

use webcompat_core::Language;

use crate::catalog::Catalog;

/// Longest `matched_text` kept, in characters.
const MAX_MATCHED_TEXT: usize = 200;
/// Longest `source_line` kept, in characters. Minified bundles have very
/// long lines.
const MAX_SOURCE_LINE: usize = 500;

/// A single pattern hit before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Index of the feature in catalog order.
    pub feature_index: usize,
    /// 1-based line number.
    pub line: u32,
    /// 1-based character column of the first matched character.
    pub column: u32,
    pub matched_text: String,
    pub source_line: String,
}

/// Split `text` into lines on `\n`, dropping trailing `\r`s from each.
///
/// A final `\n` terminates the last line instead of starting an empty one,
/// so `"a\n"` and `"a"` are both one line. Empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').map(|l| l.trim_end_matches('\r')).collect()
}

/// Match every feature in the catalog against `text`.
pub fn match_text(text: &str, catalog: &Catalog) -> Vec<RawMatch> {
    match_text_for(text, catalog, Language::Unknown)
}

/// Match the features whose group `language` scans.
pub fn match_text_for(text: &str, catalog: &Catalog, language: Language) -> Vec<RawMatch> {
    match_lines(&split_lines(text), catalog, language)
}

/// Match pre-split `lines`. Line numbers are positions in `lines`, plus one.
pub fn match_lines(lines: &[&str], catalog: &Catalog, language: Language) -> Vec<RawMatch> {
    if lines.is_empty() {
        return Vec::new();
    }

    let candidates = catalog.candidates_in(lines);
    let mut matches = Vec::new();

    for (feature_index, feature) in catalog.features().iter().enumerate() {
        if !language.scans(feature.group) || !candidates[feature_index] {
            continue;
        }
        for (line_idx, line) in lines.iter().enumerate() {
            if let Some(m) = feature.find_in(line) {
                matches.push(RawMatch {
                    feature_index,
                    line: to_u32(line_idx + 1),
                    column: to_u32(line[..m.start()].chars().count() + 1),
                    matched_text: truncate_chars(m.as_str(), MAX_MATCHED_TEXT),
                    source_line: truncate_chars(line, MAX_SOURCE_LINE),
                });
            }
        }
    }

    matches
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Truncate on a character boundary, appending "..." when shortened.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}
