use crate::hygiene::HygieneReport;
use serde_json::{Map, Value};
use std::fmt;

/// Key whose object value is pruned recursively.
pub const META_KEY: &str = "meta";
/// Key whose array elements are pruned recursively.
pub const DOCUMENTS_KEY: &str = "documents";

/// Helper for building JSON paths in reports.
#[derive(Debug, Clone)]
pub(crate) struct Path {
    segments: Vec<String>,
}

impl Path {
    pub(crate) fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub(crate) fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    pub(crate) fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Whether a value counts as empty for pruning: `""`, `[]` or `{}`.
///
/// `null`, `0`, `false` and negative sentinels are not empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Returns a copy of `value` with empty entries removed.
///
/// Only objects are pruned. Recursion is limited to the `meta` entry and
/// the elements of the `documents` entry; every other nested value is kept
/// as-is. Children are pruned before the emptiness check, so a `meta` block
/// that prunes down to `{}` is removed too and the operation is idempotent.
pub fn prune(value: &Value) -> Value {
    let mut report = HygieneReport::new();
    prune_with_report(value, &mut report)
}

/// [`prune`], recording every removed entry in `report`.
pub fn prune_with_report(value: &Value, report: &mut HygieneReport) -> Value {
    prune_at(value, &Path::root(), report)
}

fn prune_at(value: &Value, path: &Path, report: &mut HygieneReport) -> Value {
    let Value::Object(map) = value else {
        return value.clone();
    };

    let mut cleaned = Map::new();
    for (key, child) in map {
        let child_path = path.push_field(key);
        let child = match (key.as_str(), child) {
            (META_KEY, Value::Object(_)) => prune_at(child, &child_path, report),
            (DOCUMENTS_KEY, Value::Array(docs)) => Value::Array(
                docs.iter()
                    .enumerate()
                    .map(|(idx, doc)| prune_at(doc, &child_path.push_index(idx), report))
                    .collect(),
            ),
            _ => child.clone(),
        };
        if is_empty_value(&child) {
            report.record_pruned(child_path.to_string());
            continue;
        }
        cleaned.insert(key.clone(), child);
    }
    Value::Object(cleaned)
}
