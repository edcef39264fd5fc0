//! Operation walk: fill missing `operationId`s and register operation tags.
//!
//! Validates the document shape up front; past that point nothing can
//! fail, so a run is all-or-nothing. Path items and operations with an
//! unexpected shape are skipped, not reported.

use crate::error::EnhanceError;
use crate::slug;
use crate::tags;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

/// HTTP method keys recognized inside a path item (matched case-insensitively).
pub const HTTP_METHODS: &[&str] = &[
    "get", "post", "put", "patch", "delete", "head", "options", "trace",
];

const OPERATION_ID_KEY: &str = "operationId";

/// Counters reported after a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Operations visited (recognized method with an object value).
    pub operations: usize,
    /// Operations that received a synthesized identifier.
    pub generated_operation_ids: usize,
    /// Size of the top-level tag registry after the merge.
    pub top_level_tags: usize,
}

/// Normalize an OpenAPI document in place.
pub fn normalize(doc: &mut Value) -> Result<Report, EnhanceError> {
    let root = doc
        .as_object_mut()
        .ok_or(EnhanceError::Structure("document root is not an object"))?;
    let paths = match root.get_mut("paths") {
        Some(Value::Object(paths)) => paths,
        Some(_) => return Err(EnhanceError::Structure("'paths' section is not an object")),
        None => return Err(EnhanceError::Structure("missing 'paths' section")),
    };

    let mut report = Report::default();
    let mut discovered = BTreeSet::new();

    for (path, item) in paths.iter_mut() {
        let Some(item) = item.as_object_mut() else {
            debug!(%path, "skipping path item that is not an object");
            continue;
        };
        for (method, operation) in item.iter_mut() {
            if !is_http_method(method) {
                continue;
            }
            let Some(operation) = operation.as_object_mut() else {
                debug!(%path, %method, "skipping operation that is not an object");
                continue;
            };
            report.operations += 1;

            if operation.get(OPERATION_ID_KEY).map_or(true, is_falsy) {
                let id = slug::operation_id(method, path);
                debug!(%path, %method, operation_id = %id, "generated operation id");
                operation.insert(OPERATION_ID_KEY.to_string(), Value::String(id));
                report.generated_operation_ids += 1;
            }

            tags::collect(operation.get("tags"), &mut discovered);
        }
    }

    report.top_level_tags = tags::merge(root, &discovered);
    Ok(report)
}

fn is_http_method(key: &str) -> bool {
    HTTP_METHODS
        .iter()
        .any(|method| method.eq_ignore_ascii_case(key))
}

/// JSON values that count as "no identifier".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
