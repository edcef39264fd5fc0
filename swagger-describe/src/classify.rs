//! Line classification for swag-style `//` annotation comments.

use crate::model::{LineKind, SummaryLine};
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)//(\s*)@Summary\s+(.+)$").unwrap());

// `\b` keeps `@DescriptionX` from counting as a description.
static RE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//\s*@Description\b").unwrap());

const COMMENT_MARKER: &str = "//";

/// Classify a single line.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = RE_SUMMARY.captures(line) {
        // All three groups always participate in a match.
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        return LineKind::Summary(SummaryLine {
            indent: group(1),
            gap: group(2),
            text: group(3),
        });
    }
    if RE_DESCRIPTION.is_match(line) {
        return LineKind::Description;
    }
    if line.trim_start().starts_with(COMMENT_MARKER) {
        return LineKind::Comment;
    }
    LineKind::Code
}

/// Classify every line of a file.
pub fn classify_lines<'a>(lines: &[&'a str]) -> Vec<LineKind<'a>> {
    lines.iter().map(|line| classify(line)).collect()
}
