use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metric key counting entries removed by pruning.
pub const METRIC_PRUNED_KEYS: &str = "pruned_keys";
/// Metric key counting documents seen during emission.
pub const METRIC_DOCUMENTS: &str = "documents";

/// Hygiene status for an emission pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HygieneStatus {
    /// Nothing was removed and nothing looked wrong.
    Clean,
    /// Empty fields were removed; the result is otherwise unremarkable.
    Pruned,
    /// Warnings were raised; inspect them before trusting cross references.
    Suspect,
}

/// Stable warning code emitted during emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HygieneWarning(String);

impl HygieneWarning {
    /// Creates a warning from a literal code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Warning code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Report produced by pruning and canonical emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HygieneReport {
    /// Overall hygiene status.
    pub status: HygieneStatus,
    /// Stable warning codes.
    pub warnings: Vec<HygieneWarning>,
    /// Counters such as pruned keys and documents.
    pub metrics: BTreeMap<String, u64>,
    /// Paths of removed entries, e.g. `documents.[0].tokenList`.
    pub pruned_paths: Vec<String>,
}

impl HygieneReport {
    /// Creates an empty, clean report.
    pub fn new() -> Self {
        Self {
            status: HygieneStatus::Clean,
            warnings: vec![],
            metrics: BTreeMap::new(),
            pruned_paths: vec![],
        }
    }

    /// Adds `by` to the named counter.
    pub fn bump(&mut self, metric: &str, by: u64) {
        *self.metrics.entry(metric.to_string()).or_insert(0) += by;
    }

    /// Records a removed entry.
    pub fn record_pruned(&mut self, path: String) {
        self.bump(METRIC_PRUNED_KEYS, 1);
        self.pruned_paths.push(path);
        if self.status == HygieneStatus::Clean {
            self.status = HygieneStatus::Pruned;
        }
    }

    /// Records a warning and marks the report suspect.
    pub fn warn(&mut self, code: impl Into<String>) {
        self.warnings.push(HygieneWarning::new(code));
        self.status = HygieneStatus::Suspect;
    }

    /// Value of a counter, zero if never bumped.
    pub fn metric(&self, metric: &str) -> u64 {
        self.metrics.get(metric).copied().unwrap_or(0)
    }
}

impl Default for HygieneReport {
    fn default() -> Self {
        Self::new()
    }
}
