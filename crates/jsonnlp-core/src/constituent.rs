use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::sentinel::{is_unset_prob, TokenId, UNSET_PROB};

/// Label wrapped around bracketings that lack an explicit root.
pub const ROOT_LABEL: &str = "ROOT";

/// Scope of an operator (negation, quantifier) within a constituent parse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    /// Scope id.
    pub id: i64,
    /// Governing tokens.
    pub gov: Vec<TokenId>,
    /// Dependent tokens.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dep: Vec<TokenId>,
    /// Terminal tokens.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub terminals: Vec<TokenId>,
}

/// Constituent parse of one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constituent {
    /// Sentence the parse belongs to.
    pub sentence_id: i64,
    /// Grammar or parser type.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub parse_type: String,
    /// Labeled bracketing, always rooted.
    pub labeled_bracketing: String,
    /// Confidence.
    #[serde(default = "crate::sentinel::unset_prob", skip_serializing_if = "is_unset_prob")]
    pub prob: f64,
    /// Operator scopes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<Scope>,
}

impl Constituent {
    /// Builds a parse from a bracketed string, rooting it if needed.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptyBracketing`] if `bracketing` is blank.
    pub fn new(sentence_id: i64, bracketing: &str) -> Result<Self, ModelError> {
        Ok(Self {
            sentence_id,
            parse_type: String::new(),
            labeled_bracketing: root_bracketing(bracketing)?,
            prob: UNSET_PROB,
            scopes: Vec::new(),
        })
    }
}

/// Trims `bracketing` and wraps it in a `ROOT` node using its own bracket
/// characters, e.g. `(NP ...)` becomes `(ROOT (NP ...))`.
///
/// Input whose label right after the opening bracket is already `ROOT` is
/// returned trimmed but otherwise unchanged.
pub fn root_bracketing(bracketing: &str) -> Result<String, ModelError> {
    let s = bracketing.trim();
    let (Some(open), Some(close)) = (s.chars().next(), s.chars().last()) else {
        return Err(ModelError::EmptyBracketing);
    };

    let label: String = s.chars().skip(1).take(ROOT_LABEL.len()).collect();
    if label == ROOT_LABEL {
        Ok(s.to_string())
    } else {
        Ok(format!("{}{} {}{}", open, ROOT_LABEL, s, close))
    }
}
