use jsonnlp_canonical::{prune, CanonicalizationResult, Canonicalizer, Clock};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::Document;
use crate::errors::ModelError;
use crate::meta::Meta;

/// Root interchange container: shared metadata plus ordered documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// Corpus-level metadata.
    #[serde(default)]
    pub meta: Meta,
    /// Opaque CoNLL interop bag, passed through untouched.
    #[serde(default)]
    pub conll: Map<String, Value>,
    /// Documents, in order.
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Creates a corpus with empty metadata and no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a corpus whose metadata carries the format version and
    /// creation time.
    pub fn stamped(clock: &dyn Clock) -> Self {
        Self {
            meta: Meta::stamped(clock),
            ..Self::default()
        }
    }

    /// Appends a new empty document whose id is the current document count.
    pub fn add_document(&mut self) -> &mut Document {
        let id = self.documents.len() as i64;
        self.push_document(Document::new(id))
    }

    /// Appends `doc` as-is. Its id is not reassigned; keeping ids unique is
    /// up to the caller.
    pub fn push_document(&mut self, doc: Document) -> &mut Document {
        self.documents.push(doc);
        let last = self.documents.len() - 1;
        &mut self.documents[last]
    }

    /// Full (unpruned) JSON form.
    pub fn to_value(&self) -> Result<Value, ModelError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Compact JSON form with empty corpus, document and metadata fields
    /// removed.
    pub fn to_pruned_value(&self) -> Result<Value, ModelError> {
        Ok(prune(&self.to_value()?))
    }

    /// Pretty-printed compact JSON.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(&self.to_pruned_value()?)?)
    }

    /// Canonical bytes and hygiene report, via `canonicalizer`.
    pub fn canonicalize(
        &self,
        canonicalizer: &Canonicalizer,
    ) -> Result<CanonicalizationResult, ModelError> {
        Ok(canonicalizer.canonicalize(&self.to_value()?)?)
    }
}
