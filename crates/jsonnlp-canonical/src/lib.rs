//! Format-level primitives for the JSON-NLP interchange format.
//!
//! Nothing in this crate knows about tokens or clauses. It provides the
//! machinery the annotation model is built from: closed, per-key-typed
//! records, the bounded empty-field pruning applied before emission,
//! canonical byte rendering, and metadata timestamps.
//!
#![deny(missing_docs)]

/// Canonical byte rendering of pruned interchange values.
pub mod canonicalizer;
/// Hygiene report types emitted during pruning and emission.
pub mod hygiene;
/// Empty-field pruning at the corpus, document and metadata levels.
pub mod prune;
/// Fixed-key, per-key-typed records.
pub mod record;
/// Metadata timestamps and the injectable clock.
pub mod timestamp;
/// Validation helpers used by format primitives.
pub mod validation;

pub use canonicalizer::{CanonicalizationError, CanonicalizationResult, Canonicalizer};
pub use hygiene::{HygieneReport, HygieneStatus, HygieneWarning};
pub use prune::{is_empty_value, prune, prune_with_report};
pub use record::{FieldKind, FieldSet, FieldValue, TypedRecord};
pub use timestamp::{Clock, FixedClock, SystemClock, Timestamp};
pub use validation::ValidationError;

/// Version of the interchange format written to `DC.conformsTo`.
pub const FORMAT_VERSION: &str = "0.7";
