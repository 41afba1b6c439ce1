use serde::{Deserialize, Serialize};

use crate::sentinel::{is_unset, is_unset_prob, unset_int, unset_prob, TokenId, UNSET, UNSET_PROB};

/// Representative mention of a coreference chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    /// Tokens of the mention.
    #[serde(default)]
    pub tokens: Vec<TokenId>,
    /// Head token of the mention.
    #[serde(default = "unset_int", skip_serializing_if = "is_unset")]
    pub head: TokenId,
}

impl Default for Representative {
    fn default() -> Self {
        Self {
            tokens: Vec::new(),
            head: UNSET,
        }
    }
}

/// A mention referring back to the representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referent {
    /// Tokens of the mention.
    #[serde(default)]
    pub tokens: Vec<TokenId>,
    /// Head token of the mention.
    #[serde(default = "unset_int", skip_serializing_if = "is_unset")]
    pub head: TokenId,
    /// Confidence that the mention belongs to the chain.
    #[serde(default = "unset_prob", skip_serializing_if = "is_unset_prob")]
    pub prob: f64,
}

impl Referent {
    /// Creates a referent over `tokens` with no head and no confidence.
    pub fn new(tokens: Vec<TokenId>) -> Self {
        Self {
            tokens,
            head: UNSET,
            prob: UNSET_PROB,
        }
    }
}

/// A coreference chain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coreference {
    /// Chain id.
    pub id: i64,
    /// Representative mention.
    #[serde(default)]
    pub representative: Representative,
    /// Other mentions.
    #[serde(default)]
    pub referents: Vec<Referent>,
}

impl Coreference {
    /// Creates a chain with an empty representative and no referents.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            representative: Representative::default(),
            referents: Vec::new(),
        }
    }
}
