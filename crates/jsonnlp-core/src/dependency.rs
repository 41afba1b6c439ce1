use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::sentinel::{is_unset_prob, unset_prob, TokenId, UNSET_PROB};

/// A labeled dependency arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    /// Dependency label, e.g. `nsubj`.
    #[serde(rename = "lab")]
    pub label: String,
    /// Governor (head word) token.
    pub gov: TokenId,
    /// Dependent token.
    pub dep: TokenId,
    /// Confidence.
    #[serde(default = "unset_prob", skip_serializing_if = "is_unset_prob")]
    pub prob: f64,
}

impl Dependency {
    /// Creates an arc without a confidence score.
    pub fn new(label: impl Into<String>, gov: TokenId, dep: TokenId) -> Self {
        Self {
            label: label.into(),
            gov,
            dep,
            prob: UNSET_PROB,
        }
    }
}

/// Dependency arcs of one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DependencyTree {
    /// Sentence the arcs belong to.
    pub sentence_id: i64,
    /// Annotation style, e.g. `universal`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,
    /// The arcs.
    pub trees: Vec<Dependency>,
    /// Confidence of the whole parse.
    #[serde(skip_serializing_if = "is_unset_prob")]
    pub prob: f64,
}

impl DependencyTree {
    /// Creates an empty tree for `sentence_id`.
    pub fn new(sentence_id: i64) -> Self {
        Self {
            sentence_id,
            style: String::new(),
            trees: Vec::new(),
            prob: UNSET_PROB,
        }
    }

    /// Appends an arc.
    pub fn add_arc(&mut self, label: impl Into<String>, gov: TokenId, dep: TokenId) -> &mut Dependency {
        self.trees.push(Dependency::new(label, gov, dep));
        let last = self.trees.len() - 1;
        &mut self.trees[last]
    }

    /// Tokens of `span` not governed by another token of `span`.
    ///
    /// Arcs are visited in order; an arc removes its dependent only if both
    /// endpoints are still candidates at that point. A self-loop removes its
    /// token, so a span can end up with no candidates at all.
    pub fn span_roots(&self, span: &[TokenId]) -> BTreeSet<TokenId> {
        let mut candidates: BTreeSet<TokenId> = span.iter().copied().collect();
        for arc in &self.trees {
            if candidates.contains(&arc.gov) && candidates.contains(&arc.dep) {
                candidates.remove(&arc.dep);
            }
        }
        candidates
    }
}

impl Default for DependencyTree {
    fn default() -> Self {
        Self::new(0)
    }
}
