//! Fallback description text derived from a summary.

/// Summary prefixes (lowercase) and the description they produce.
/// First match wins.
const RULES: &[(&[&str], &str)] = &[
    (&["list "], "Returns a filtered, paginated list for this endpoint."),
    (
        &["get ", "retrieve "],
        "Returns the requested resource if found and accessible.",
    ),
    (&["create "], "Validates input and creates a new resource."),
    (&["update "], "Validates input and updates the target resource."),
    (
        &["delete ", "remove "],
        "Deletes the target resource and returns the operation result.",
    ),
    (
        &["health check"],
        "Returns service health and readiness information.",
    ),
];

const FALLBACK: &str = "Handles this endpoint operation.";

/// Pick the description for a summary, matching case-insensitively on the trimmed text.
pub fn default_description(summary: &str) -> &'static str {
    let lowered = summary.trim().to_lowercase();
    RULES
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|p| lowered.starts_with(p)))
        .map_or(FALLBACK, |&(_, description)| description)
}
