//! Top-level tag registry merge.
//!
//! Every tag referenced by an operation must appear by name in the
//! document's `tags` list. Existing records are never touched or
//! reordered; missing names are appended as `{"name": ...}` in
//! ascending order.

use serde_json::{json, Map, Value};
use std::collections::{BTreeSet, HashSet};
use tracing::{info, warn};

const TAGS_KEY: &str = "tags";

/// Add the string tags of one operation's `tags` list to `into`.
///
/// Tags are trimmed; blanks and non-string entries are dropped.
pub fn collect(tags: Option<&Value>, into: &mut BTreeSet<String>) {
    let Some(Value::Array(tags)) = tags else {
        return;
    };
    for tag in tags.iter().filter_map(Value::as_str) {
        let tag = tag.trim();
        if !tag.is_empty() {
            into.insert(tag.to_string());
        }
    }
}

/// Names already present in the registry, trimmed.
fn registered_names(root: &Map<String, Value>) -> HashSet<String> {
    match root.get(TAGS_KEY) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| entry.get("name")?.as_str())
            .map(|name| name.trim().to_string())
            .collect(),
        _ => HashSet::new(),
    }
}

/// Append every discovered tag missing from the registry.
///
/// Returns the final registry size. A registry that is not a list counts
/// as empty; it is only replaced when something has to be appended.
pub fn merge(root: &mut Map<String, Value>, discovered: &BTreeSet<String>) -> usize {
    let registered = registered_names(root);
    let missing: Vec<&String> = discovered
        .iter()
        .filter(|name| !registered.contains(name.as_str()))
        .collect();

    if missing.is_empty() {
        return match root.get(TAGS_KEY) {
            Some(Value::Array(entries)) => entries.len(),
            _ => 0,
        };
    }

    match root.get(TAGS_KEY).map(kind) {
        Some("array") => {}
        Some(found) => {
            warn!(found, "top-level tags is not a list, replacing it");
            root.insert(TAGS_KEY.to_string(), Value::Array(Vec::new()));
        }
        None => {
            root.insert(TAGS_KEY.to_string(), Value::Array(Vec::new()));
        }
    }

    let Some(Value::Array(entries)) = root.get_mut(TAGS_KEY) else {
        return 0;
    };
    for name in missing {
        info!(tag = %name, "registering tag");
        entries.push(json!({ "name": name }));
    }
    entries.len()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
