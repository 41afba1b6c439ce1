use thiserror::Error;

/// Errors raised by the annotation model.
///
/// Typed-record writes never fail and are not represented here.
#[derive(Error, Debug)]
pub enum ModelError {
    /// No dependency tree exists at the requested 1-based sentence position.
    #[error("sentence {sentence_id} is out of range (document has {available} dependency trees)")]
    SentenceOutOfRange {
        /// Requested 1-based sentence position.
        sentence_id: i64,
        /// Number of dependency trees in the document.
        available: usize,
    },
    /// No dependency tree carries the requested sentence id.
    #[error("no dependency tree for sentence {sentence_id}")]
    MissingDependencyTree {
        /// Sentence id looked up.
        sentence_id: i64,
    },
    /// A constituent bracketing was blank.
    #[error("labeled bracketing is empty")]
    EmptyBracketing,
    /// Conversion to a JSON value failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Canonical emission failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] jsonnlp_canonical::CanonicalizationError),
}
