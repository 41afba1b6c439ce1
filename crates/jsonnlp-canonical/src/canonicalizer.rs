use canonical_json::to_string;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::hygiene::{HygieneReport, METRIC_DOCUMENTS};
use crate::prune::{prune_with_report, DOCUMENTS_KEY};

/// Warning raised when two documents share an `id`.
pub const WARN_DUPLICATE_DOCUMENT_ID: &str = "DuplicateDocumentId";

/// Error returned when canonical emission fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The root value was not a JSON object.
    #[error("expected a JSON object at the root, found {0}")]
    NotAnObject(&'static str),
    /// Generic failure from the canonical JSON writer.
    #[error("other error: {0}")]
    Other(String),
}

/// Result of canonical emission.
#[derive(Debug)]
pub struct CanonicalizationResult {
    /// The (pruned) value the bytes were rendered from.
    pub value: Value,
    /// Canonical UTF-8 bytes (RFC 8785: sorted keys, no whitespace).
    pub bytes: Vec<u8>,
    /// What pruning removed and anything suspicious found on the way.
    pub report: HygieneReport,
}

/// Renders interchange values as deterministic bytes.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    prune_empty: bool,
}

impl Canonicalizer {
    /// Creates a canonicalizer that prunes empty fields before rendering.
    pub fn new() -> Self {
        Self { prune_empty: true }
    }

    /// Keeps empty fields; the skeleton is rendered as-is.
    pub fn keep_empty(mut self) -> Self {
        self.prune_empty = false;
        self
    }

    /// Prunes (unless disabled), checks document ids and renders canonical bytes.
    pub fn canonicalize(&self, value: &Value) -> Result<CanonicalizationResult, CanonicalizationError> {
        if !value.is_object() {
            return Err(CanonicalizationError::NotAnObject(kind_name(value)));
        }

        let mut report = HygieneReport::new();
        let value = if self.prune_empty {
            prune_with_report(value, &mut report)
        } else {
            value.clone()
        };

        check_documents(&value, &mut report);

        let canonical =
            to_string(&value).map_err(|err| CanonicalizationError::Other(err.to_string()))?;
        let bytes = canonical.into_bytes();

        Ok(CanonicalizationResult {
            value,
            bytes,
            report,
        })
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts documents and flags duplicate ids. Ids are caller-assigned, so a
/// duplicate is a warning, never an error.
fn check_documents(value: &Value, report: &mut HygieneReport) {
    let Some(docs) = value.get(DOCUMENTS_KEY).and_then(Value::as_array) else {
        return;
    };
    report.bump(METRIC_DOCUMENTS, docs.len() as u64);

    let mut seen = BTreeSet::new();
    for id in docs.iter().filter_map(|d| d.get("id").and_then(Value::as_i64)) {
        if !seen.insert(id) {
            log::warn!("document id {} appears more than once", id);
            report.warn(WARN_DUPLICATE_DOCUMENT_ID);
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
