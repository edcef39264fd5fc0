//! Operation identifier synthesis from an HTTP method and a path template.
//!
//! `/customers/{id}/wallets` → `customers_by_id_wallets`, and with the
//! method prepended: `get_customers_by_id_wallets`.
//!
//! Distinct templates may normalize to the same slug (`/a-b` and `/a_b`).
//! Collisions are neither detected nor disambiguated.

use regex::Regex;
use std::sync::LazyLock;

/// Any run of characters outside `[A-Za-z0-9_]`.
static RE_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]+").unwrap());

/// Slug used when a path has no segments at all (`/`, empty string).
const ROOT_SLUG: &str = "root";

/// Convert a path template into an identifier-safe slug.
pub fn slugify_path(path: &str) -> String {
    let converted: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(convert_segment)
        .filter(|token| !token.is_empty())
        .collect();

    if converted.is_empty() {
        ROOT_SLUG.to_string()
    } else {
        converted.join("_")
    }
}

/// Build `{method}_{slug}` with the method lowercased.
pub fn operation_id(method: &str, path: &str) -> String {
    format!("{}_{}", method.to_ascii_lowercase(), slugify_path(path))
}

fn convert_segment(segment: &str) -> String {
    match segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        Some(param) => format!("by_{}", squash(param.trim())),
        None => squash(segment),
    }
}

fn squash(text: &str) -> String {
    RE_NON_WORD.replace_all(text, "_").to_ascii_lowercase()
}
