use jsonnlp_canonical::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constituent::Constituent;
use crate::coreference::Coreference;
use crate::dependency::DependencyTree;
use crate::entities::{Clause, Entity, Expression, Paragraph, Relation, Sentence, Token};
use crate::errors::ModelError;
use crate::head;
use crate::meta::Meta;
use crate::sentinel::{TokenId, UNSET};
use crate::triple::Triple;

/// One annotated text unit.
///
/// Every collection is append-only through the `add_*` methods, which give
/// the new entry an id equal to the collection's length before the append.
/// Serialization always emits every key; prune the result for the compact
/// form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document-level metadata.
    #[serde(default)]
    pub meta: Meta,
    /// Document id, unique within the corpus.
    pub id: i64,
    /// Id of the matching CoNLL document, if any.
    #[serde(default)]
    pub conll_id: String,
    /// Raw text.
    #[serde(default)]
    pub text: String,
    /// Tokens.
    #[serde(rename = "tokenList", default)]
    pub tokens: Vec<Token>,
    /// Clauses.
    #[serde(default)]
    pub clauses: Vec<Clause>,
    /// Sentences.
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    /// Paragraphs.
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    /// Dependency trees, one per sentence, in sentence order.
    #[serde(default)]
    pub dependencies: Vec<DependencyTree>,
    /// Coreference chains.
    #[serde(default)]
    pub coreferences: Vec<Coreference>,
    /// Constituent parses.
    #[serde(default)]
    pub constituents: Vec<Constituent>,
    /// Multi-token expressions.
    #[serde(default)]
    pub expressions: Vec<Expression>,
    /// Entities.
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Relations.
    #[serde(default)]
    pub relations: Vec<Relation>,
    /// Semantic triples.
    #[serde(default)]
    pub triples: Vec<Triple>,
}

fn push<T>(items: &mut Vec<T>, item: T) -> &mut T {
    items.push(item);
    let last = items.len() - 1;
    &mut items[last]
}

fn next_id<T>(items: &[T]) -> i64 {
    items.len() as i64
}

impl Document {
    /// Creates a document with empty metadata and empty collections.
    pub fn new(id: i64) -> Self {
        Self {
            meta: Meta::new(),
            id,
            conll_id: String::new(),
            text: String::new(),
            tokens: Vec::new(),
            clauses: Vec::new(),
            sentences: Vec::new(),
            paragraphs: Vec::new(),
            dependencies: Vec::new(),
            coreferences: Vec::new(),
            constituents: Vec::new(),
            expressions: Vec::new(),
            entities: Vec::new(),
            relations: Vec::new(),
            triples: Vec::new(),
        }
    }

    /// Creates a document whose metadata carries the format version and
    /// creation time.
    pub fn stamped(id: i64, clock: &dyn Clock) -> Self {
        Self {
            meta: Meta::stamped(clock),
            ..Self::new(id)
        }
    }

    /// Appends a token of sentence `sentence_id`.
    pub fn add_token(&mut self, sentence_id: i64) -> &mut Token {
        let id = next_id(&self.tokens);
        push(&mut self.tokens, Token::new(id, sentence_id))
    }

    /// Appends a sentence.
    pub fn add_sentence(&mut self) -> &mut Sentence {
        let id = next_id(&self.sentences);
        push(&mut self.sentences, Sentence::new(id))
    }

    /// Appends a clause bound to `sentence_id`.
    pub fn add_clause(&mut self, sentence_id: i64) -> &mut Clause {
        let id = next_id(&self.clauses);
        push(&mut self.clauses, Clause::new(id, sentence_id))
    }

    /// Appends a paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        let id = next_id(&self.paragraphs);
        push(&mut self.paragraphs, Paragraph::new(id))
    }

    /// Appends an expression.
    pub fn add_expression(&mut self) -> &mut Expression {
        let id = next_id(&self.expressions);
        push(&mut self.expressions, Expression::new(id))
    }

    /// Appends a coreference chain.
    pub fn add_coreference(&mut self) -> &mut Coreference {
        let id = next_id(&self.coreferences);
        push(&mut self.coreferences, Coreference::new(id))
    }

    /// Appends an entity.
    pub fn add_entity(&mut self, label: impl Into<String>, kind: impl Into<String>) -> &mut Entity {
        let id = next_id(&self.entities);
        push(&mut self.entities, Entity::new(id, label, kind))
    }

    /// Appends a relation.
    pub fn add_relation(
        &mut self,
        label: impl Into<String>,
        kind: impl Into<String>,
    ) -> &mut Relation {
        let id = next_id(&self.relations);
        push(&mut self.relations, Relation::new(id, label, kind))
    }

    /// Appends an empty dependency tree for `sentence_id`.
    ///
    /// Head lookups find trees by position, so trees should be added in
    /// sentence order.
    pub fn add_dependency_tree(&mut self, sentence_id: i64) -> &mut DependencyTree {
        push(&mut self.dependencies, DependencyTree::new(sentence_id))
    }

    /// Appends a constituent parse built from `bracketing`.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptyBracketing`] if `bracketing` is blank; nothing is
    /// appended in that case.
    pub fn add_constituent(
        &mut self,
        sentence_id: i64,
        bracketing: &str,
    ) -> Result<&mut Constituent, ModelError> {
        let parse = Constituent::new(sentence_id, bracketing)?;
        Ok(push(&mut self.constituents, parse))
    }

    /// Appends a semantic triple.
    pub fn add_triple(&mut self, triple: Triple) -> &mut Triple {
        push(&mut self.triples, triple)
    }

    /// Head of `token_ids` in 1-based sentence `sentence_id`; see
    /// [`head::find_head`].
    pub fn find_head(
        &self,
        token_ids: &[TokenId],
        sentence_id: i64,
    ) -> Result<Option<TokenId>, ModelError> {
        head::find_head(self, token_ids, sentence_id)
    }

    /// Fills in `head` for every clause that has none, using the clause's
    /// token list (or `tokenFrom..=tokenTo` span). The tree is the one whose
    /// `sentenceId` equals the clause's `sentenceID`, so clauses and trees
    /// added with the id returned by [`Document::add_sentence`] line up.
    /// Returns how many heads were set.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingDependencyTree`] from the first clause whose
    /// sentence has no dependency tree. Heads filled before that clause are
    /// kept.
    pub fn fill_clause_heads(&mut self) -> Result<usize, ModelError> {
        let mut filled = 0;
        for idx in 0..self.clauses.len() {
            let clause = &self.clauses[idx];
            if clause.head != UNSET {
                continue;
            }
            let span = clause.span();
            if span.is_empty() {
                continue;
            }
            let tree = head::tree_for_sentence(self, clause.sentence_id)?;
            if let Some(head) = head::find_head_in_tree(tree, &span) {
                self.clauses[idx].head = head;
                filled += 1;
            }
        }
        Ok(filled)
    }

    /// Full (unpruned) JSON form.
    pub fn to_value(&self) -> Result<Value, ModelError> {
        Ok(serde_json::to_value(self)?)
    }
}
