//! Annotation document model for the JSON-NLP interchange format.
//!
//! This crate provides:
//! - Entity types (tokens, sentences, clauses, dependency arcs, coreference
//!   chains, constituent parses, entities, relations, semantic triples)
//! - Document and corpus assembly with dense, append-order ids
//! - Head finding for token spans over a sentence's dependency arcs
//!
//! Core invariants:
//! - Unannotated attributes hold a sentinel (`-1`, `-1.0`, `""`, empty) and
//!   are omitted when an entity is serialized
//! - Entities refer to each other by integer id only
//! - Documents serialize every key; pruning produces the compact form
//!
#![deny(missing_docs)]

/// Constituent parses and bracketing normalization.
pub mod constituent;
/// Coreference chains.
pub mod coreference;
/// The corpus root container.
pub mod corpus;
/// Dependency arcs and trees.
pub mod dependency;
/// The document container and its `add_*` operations.
pub mod document;
/// Tokens, sentences, clauses and other span-level entities.
pub mod entities;
/// Error types for model operations.
pub mod errors;
/// Head finding over dependency trees.
pub mod head;
/// Dublin Core metadata blocks.
pub mod meta;
/// Sentinel values and tri-state annotations.
pub mod sentinel;
/// Semantic triples.
pub mod triple;

pub use constituent::{root_bracketing, Constituent, Scope};
pub use coreference::{Coreference, Referent, Representative};
pub use corpus::Corpus;
pub use dependency::{Dependency, DependencyTree};
pub use document::Document;
pub use entities::{
    Attribute, Clause, Entity, Expression, Paragraph, Relation, Sentence, Token, TokenFeatures,
};
pub use errors::ModelError;
pub use head::{find_head, find_head_in_tree, head_candidates, tree_for_sentence};
pub use meta::{Meta, MetaField};
pub use sentinel::{Flag, ResourceId, TokenId, UNSET, UNSET_PROB};
pub use triple::{Triple, TripleField};
