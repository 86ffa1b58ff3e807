//! Line matcher tests against small inline catalogs.

use webcompat_analysis::catalog::Catalog;
use webcompat_analysis::matcher::{match_lines, match_text, match_text_for, split_lines};
use webcompat_core::Language;

const PACK: &str = r#"
[pack]
name = "matcher"
group = "javascript"

[[features]]
id = "arrow"
name = "Arrow"
pattern = '=>'
hints = ["=>"]
status = "widely-available"

[[features]]
id = "spread"
name = "Spread"
pattern = '\.\.\.[A-Za-z_]'
status = "widely-available"

[[features]]
id = "grid"
name = "Grid"
group = "css"
pattern = 'display:\s*grid'
hints = ["grid"]
status = "widely-available"

[[features]]
id = "pipe"
name = "Pipe"
pattern = '(?P<hit>\|>)\s*[a-z]'
status = "unsupported"
"#;

fn catalog() -> Catalog {
    Catalog::from_packs(&[("matcher", PACK)]).unwrap()
}

#[test]
fn empty_text_matches_nothing() {
    assert!(match_text("", &catalog()).is_empty());
}

#[test]
fn one_occurrence_per_line_per_feature() {
    let matches = match_text("f = (a) => (b) => a + b;", &catalog());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].column, 9);
    assert_eq!(matches[0].matched_text, "=>");
}

#[test]
fn output_is_feature_order_then_line_order() {
    let text = "g(...args)\nh = x => x\nk(...rest, y => y)";
    let matches = match_text(text, &catalog());
    let got: Vec<(usize, u32)> = matches.iter().map(|m| (m.feature_index, m.line)).collect();
    assert_eq!(got, [(0, 2), (0, 3), (1, 1), (1, 3)]);
}

#[test]
fn lines_split_on_newline_and_strip_carriage_return() {
    let matches = match_text("a => b\r\n\r\nc => d\r\n", &catalog());
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].line, 1);
    assert_eq!(matches[0].source_line, "a => b");
    assert_eq!(matches[1].line, 3);
}

#[test]
fn columns_count_characters_not_bytes() {
    let matches = match_text("ñ😀 => 1", &catalog());
    assert_eq!(matches[0].column, 4);
}

#[test]
fn language_filters_groups() {
    let text = ".a { display: grid }\nx => x";
    let css = match_text_for(text, &catalog(), Language::Css);
    assert_eq!(css.len(), 1);
    assert_eq!(css[0].feature_index, 2);

    let js = match_text_for(text, &catalog(), Language::Javascript);
    assert_eq!(js.len(), 1);
    assert_eq!(js[0].feature_index, 0);

    assert_eq!(match_text_for(text, &catalog(), Language::Unknown).len(), 2);
}

#[test]
fn prefilter_is_case_insensitive_but_pattern_decides() {
    // The hint "grid" occurs, the pattern does not match.
    assert!(match_text("GRID", &catalog()).is_empty());
    let catalog = catalog();
    assert!(catalog.candidates("GRID")[2]);
    assert!(!catalog.candidates("nothing here")[0]);
    // Features without hints are always candidates.
    assert!(catalog.candidates("nothing here")[1]);
}

#[test]
fn long_lines_are_truncated() {
    let line = format!("{} => x", "a".repeat(2_000));
    let matches = match_text(&line, &catalog());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].column, 2_002);
    assert!(matches[0].source_line.ends_with("..."));
    assert_eq!(matches[0].source_line.chars().count(), 503);
}

#[test]
fn bare_carriage_return_on_last_line_is_stripped() {
    let matches = match_text("x |> f\r", &catalog());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].source_line, "x |> f");

    let matches = match_text("x |> f\r\r\n", &catalog());
    assert_eq!(matches[0].source_line, "x |> f");
}

#[test]
fn hit_group_narrows_the_reported_span() {
    let matches = match_text("value |> double", &catalog());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].matched_text, "|>");
    assert_eq!(matches[0].column, 7);
}

#[test]
fn pre_split_lines_match_like_text() {
    let text = "a => b\r\n\r\nc |> d\n";
    let lines = split_lines(text);
    assert_eq!(lines, ["a => b", "", "c |> d"]);
    assert_eq!(
        match_lines(&lines, &catalog(), Language::Unknown),
        match_text(text, &catalog())
    );
}
