use serde::{Deserialize, Serialize};

use crate::sentinel::{is_unset, is_unset_prob, Flag, ResourceId, TokenId, UNSET, UNSET_PROB};

/// Morphosyntactic feature bundle of a token.
///
/// Binary features are tri-state [`Flag`]s; `number` and `person` are
/// integers with sentinel `-1`; categorical features are strings with
/// sentinel `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenFeatures {
    /// Overtly realized.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub overt: Flag,
    /// Stop word.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub stop: Flag,
    /// Alphabetic.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub alpha: Flag,
    /// Grammatical number: 1 singular, 2 dual, 3 or more plural.
    #[serde(skip_serializing_if = "is_unset")]
    pub number: i64,
    /// Grammatical gender (`male`, `female`, `neuter`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gender: String,
    /// Grammatical person (1, 2, 3).
    #[serde(skip_serializing_if = "is_unset")]
    pub person: i64,
    /// Tense (`past`, `present`, `future`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tense: String,
    /// Perfect aspect.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub perfect: Flag,
    /// Continuous aspect.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub continuous: Flag,
    /// Case (`nom`, `acc`, `dat`, `gen`, ...).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub case: String,
    /// Refers to a human.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub human: Flag,
    /// Refers to an animate being.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub animate: Flag,
    /// In the scope of a negation.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub negated: Flag,
    /// Countable noun.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub countable: Flag,
    /// Factive verb.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub factive: Flag,
    /// Counterfactive verb.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub counterfactive: Flag,
    /// Irregular form.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub irregular: Flag,
    /// Part of a phrasal verb.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub phrasal_verb: Flag,
    /// Mood (`indicative`, `imperative`, `subjunctive`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mood: String,
    /// Foreign word.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub foreign: Flag,
    /// Followed by whitespace in the raw text.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub space_after: Flag,
}

impl TokenFeatures {
    /// Whether no feature is annotated.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for TokenFeatures {
    fn default() -> Self {
        Self {
            overt: Flag::Unset,
            stop: Flag::Unset,
            alpha: Flag::Unset,
            number: UNSET,
            gender: String::new(),
            person: UNSET,
            tense: String::new(),
            perfect: Flag::Unset,
            continuous: Flag::Unset,
            case: String::new(),
            human: Flag::Unset,
            animate: Flag::Unset,
            negated: Flag::Unset,
            countable: Flag::Unset,
            factive: Flag::Unset,
            counterfactive: Flag::Unset,
            irregular: Flag::Unset,
            phrasal_verb: Flag::Unset,
            mood: String::new(),
            foreign: Flag::Unset,
            space_after: Flag::Unset,
        }
    }
}

/// A token of the document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    /// Token id, dense and zero-based within the document.
    pub id: TokenId,
    /// Owning sentence.
    pub sentence_id: i64,
    /// Surface form, e.g. `went`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Lemma, e.g. `go`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lemma: String,
    /// Language-specific part of speech, e.g. `VBD`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub xpos: String,
    /// Confidence of `xpos`.
    #[serde(skip_serializing_if = "is_unset_prob")]
    pub xpos_prob: f64,
    /// Universal part of speech, e.g. `VERB`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub upos: String,
    /// Confidence of `upos`.
    #[serde(skip_serializing_if = "is_unset_prob")]
    pub upos_prob: f64,
    /// IOB tag of the entity the token belongs to, e.g. `B`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_iob: String,
    /// Character offset of the first character.
    #[serde(rename = "characterOffsetBegin", skip_serializing_if = "is_unset")]
    pub character_offset_begin: i64,
    /// Character offset one past the last character.
    #[serde(rename = "characterOffsetEnd", skip_serializing_if = "is_unset")]
    pub character_offset_end: i64,
    /// PropBank id.
    #[serde(rename = "propID", skip_serializing_if = "String::is_empty")]
    pub prop_id: String,
    /// Confidence of `propID`.
    #[serde(rename = "propIDProbability", skip_serializing_if = "is_unset_prob")]
    pub prop_id_probability: f64,
    /// FrameNet id.
    #[serde(rename = "frameID", skip_serializing_if = "ResourceId::is_unset")]
    pub frame_id: ResourceId,
    /// WordNet id.
    #[serde(rename = "wordNetID", skip_serializing_if = "ResourceId::is_unset")]
    pub word_net_id: ResourceId,
    /// VerbNet id.
    #[serde(rename = "verbNetID", skip_serializing_if = "ResourceId::is_unset")]
    pub verb_net_id: ResourceId,
    /// Language tag, e.g. `en`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lang: String,
    /// Morphosyntactic features.
    #[serde(skip_serializing_if = "TokenFeatures::is_unset")]
    pub features: TokenFeatures,
    /// Shape signature, e.g. `Xxxx`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shape: String,
    /// Entity type, e.g. `PERSON`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity: String,
}

impl Token {
    /// Creates an unannotated token.
    pub fn new(id: TokenId, sentence_id: i64) -> Self {
        Self {
            id,
            sentence_id,
            text: String::new(),
            lemma: String::new(),
            xpos: String::new(),
            xpos_prob: UNSET_PROB,
            upos: String::new(),
            upos_prob: UNSET_PROB,
            entity_iob: String::new(),
            character_offset_begin: UNSET,
            character_offset_end: UNSET,
            prop_id: String::new(),
            prop_id_probability: UNSET_PROB,
            frame_id: ResourceId::UNSET,
            word_net_id: ResourceId::UNSET,
            verb_net_id: ResourceId::UNSET,
            lang: String::new(),
            features: TokenFeatures::default(),
            shape: String::new(),
            entity: String::new(),
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Expands an inclusive `from..=to` span; empty if either bound is unset.
pub(crate) fn span_tokens(from: TokenId, to: TokenId) -> Vec<TokenId> {
    if is_unset(&from) || is_unset(&to) || to < from {
        return Vec::new();
    }
    (from..=to).collect()
}

/// A sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sentence {
    /// Sentence id.
    pub id: i64,
    /// First token (inclusive).
    #[serde(skip_serializing_if = "is_unset")]
    pub token_from: TokenId,
    /// Last token (inclusive).
    #[serde(skip_serializing_if = "is_unset")]
    pub token_to: TokenId,
    /// Explicit token list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenId>,
    /// Clauses in this sentence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clauses: Vec<i64>,
    /// Sentence type: declarative, interrogative, exclamatory, imperative, instructive.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub sentence_type: String,
    /// Sentiment label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sentiment: String,
    /// Confidence of `sentiment`.
    #[serde(skip_serializing_if = "is_unset_prob")]
    pub sentiment_prob: f64,
}

impl Sentence {
    /// Creates an unannotated sentence.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            token_from: UNSET,
            token_to: UNSET,
            tokens: Vec::new(),
            clauses: Vec::new(),
            sentence_type: String::new(),
            sentiment: String::new(),
            sentiment_prob: UNSET_PROB,
        }
    }

    /// Explicit token list, or the `tokenFrom..=tokenTo` span.
    pub fn span(&self) -> Vec<TokenId> {
        if self.tokens.is_empty() {
            span_tokens(self.token_from, self.token_to)
        } else {
            self.tokens.clone()
        }
    }
}

impl Default for Sentence {
    fn default() -> Self {
        Self::new(0)
    }
}

/// A clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Clause {
    /// Clause id.
    pub id: i64,
    /// Owning sentence.
    #[serde(rename = "sentenceID")]
    pub sentence_id: i64,
    /// First token (inclusive).
    #[serde(skip_serializing_if = "is_unset")]
    pub token_from: TokenId,
    /// Last token (inclusive).
    #[serde(skip_serializing_if = "is_unset")]
    pub token_to: TokenId,
    /// Explicit token list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenId>,
    /// Main (as opposed to subordinate) clause.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub main: Flag,
    /// Governing token outside the clause.
    #[serde(skip_serializing_if = "is_unset")]
    pub gov: TokenId,
    /// Head token inside the clause.
    #[serde(skip_serializing_if = "is_unset")]
    pub head: TokenId,
    /// Negated.
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub neg: Flag,
    /// Tense label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tense: String,
    /// Mood label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mood: String,
    /// Aspect label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub aspect: String,
    /// Voice label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub voice: String,
    /// Sentiment label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sentiment: String,
    /// Confidence of `sentiment`.
    #[serde(skip_serializing_if = "is_unset_prob")]
    pub sentiment_prob: f64,
}

impl Clause {
    /// Creates an unannotated clause bound to `sentence_id`.
    pub fn new(id: i64, sentence_id: i64) -> Self {
        Self {
            id,
            sentence_id,
            token_from: UNSET,
            token_to: UNSET,
            tokens: Vec::new(),
            main: Flag::Unset,
            gov: UNSET,
            head: UNSET,
            neg: Flag::Unset,
            tense: String::new(),
            mood: String::new(),
            aspect: String::new(),
            voice: String::new(),
            sentiment: String::new(),
            sentiment_prob: UNSET_PROB,
        }
    }

    /// Explicit token list, or the `tokenFrom..=tokenTo` span.
    pub fn span(&self) -> Vec<TokenId> {
        if self.tokens.is_empty() {
            span_tokens(self.token_from, self.token_to)
        } else {
            self.tokens.clone()
        }
    }
}

impl Default for Clause {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// A paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    /// Paragraph id.
    pub id: i64,
    /// First token (inclusive).
    #[serde(skip_serializing_if = "is_unset")]
    pub token_from: TokenId,
    /// Last token (inclusive).
    #[serde(skip_serializing_if = "is_unset")]
    pub token_to: TokenId,
    /// Explicit token list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenId>,
    /// Sentences in this paragraph.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sentences: Vec<i64>,
}

impl Paragraph {
    /// Creates an empty paragraph.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            token_from: UNSET,
            token_to: UNSET,
            tokens: Vec::new(),
            sentences: Vec::new(),
        }
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new(0)
    }
}

/// A multi-token expression such as a noun phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Expression {
    /// Expression id.
    pub id: i64,
    /// Syntactic type, e.g. `NP`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub expression_type: String,
    /// Head token.
    #[serde(skip_serializing_if = "is_unset")]
    pub head: TokenId,
    /// Dependency label of the head, e.g. `nsubj`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dependency: String,
    /// First token (inclusive).
    #[serde(skip_serializing_if = "is_unset")]
    pub token_from: TokenId,
    /// Last token (inclusive).
    #[serde(skip_serializing_if = "is_unset")]
    pub token_to: TokenId,
    /// Tokens of the expression.
    pub tokens: Vec<TokenId>,
    /// Confidence.
    #[serde(skip_serializing_if = "is_unset_prob")]
    pub prob: f64,
}

impl Expression {
    /// Creates an empty expression.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            expression_type: String::new(),
            head: UNSET,
            dependency: String::new(),
            token_from: UNSET,
            token_to: UNSET,
            tokens: Vec::new(),
            prob: UNSET_PROB,
        }
    }
}

impl Default for Expression {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Free-form `(label, value)` pair attached to an entity or relation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute label.
    #[serde(rename = "lab")]
    pub label: String,
    /// Attribute value.
    #[serde(rename = "val")]
    pub value: String,
}

impl Attribute {
    /// Creates an attribute.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

macro_rules! labeled_record {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            /// Record id.
            pub id: i64,
            /// Label.
            pub label: String,
            /// Type.
            #[serde(rename = "type")]
            pub kind: String,
            /// Sentiment label.
            #[serde(skip_serializing_if = "String::is_empty")]
            pub sentiment: String,
            /// Confidence of `sentiment`.
            #[serde(skip_serializing_if = "is_unset_prob")]
            pub sentiment_prob: f64,
            /// Free-form attributes.
            pub attributes: Vec<Attribute>,
        }

        impl $name {
            /// Creates a record with no sentiment and no attributes.
            pub fn new(id: i64, label: impl Into<String>, kind: impl Into<String>) -> Self {
                Self {
                    id,
                    label: label.into(),
                    kind: kind.into(),
                    sentiment: String::new(),
                    sentiment_prob: UNSET_PROB,
                    attributes: Vec::new(),
                }
            }

            /// Appends an attribute.
            pub fn with_attribute(
                mut self,
                label: impl Into<String>,
                value: impl Into<String>,
            ) -> Self {
                self.attributes.push(Attribute::new(label, value));
                self
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(0, "", "")
            }
        }
    };
}

labeled_record!(Entity, "A discourse entity.");
labeled_record!(Relation, "A relation between entities.");
