use std::collections::BTreeSet;

use crate::dependency::DependencyTree;
use crate::document::Document;
use crate::errors::ModelError;
use crate::sentinel::TokenId;

/// Dependency tree of the 1-based sentence `sentence_id`.
///
/// An index of zero or past the last tree is an error.
pub fn sentence_tree(doc: &Document, sentence_id: i64) -> Result<&DependencyTree, ModelError> {
    usize::try_from(sentence_id)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| doc.dependencies.get(idx))
        .ok_or(ModelError::SentenceOutOfRange {
            sentence_id,
            available: doc.dependencies.len(),
        })
}

/// Dependency tree whose `sentenceId` field equals `sentence_id`.
///
/// Unlike [`sentence_tree`], this ignores tree position, so it matches the
/// zero-based ids that [`Document::add_sentence`] assigns.
pub fn tree_for_sentence(doc: &Document, sentence_id: i64) -> Result<&DependencyTree, ModelError> {
    doc.dependencies
        .iter()
        .find(|tree| tree.sentence_id == sentence_id)
        .ok_or(ModelError::MissingDependencyTree { sentence_id })
}

/// Every head candidate of `token_ids` in sentence `sentence_id`.
///
/// An empty span yields an empty set without consulting the document.
pub fn head_candidates(
    doc: &Document,
    token_ids: &[TokenId],
    sentence_id: i64,
) -> Result<BTreeSet<TokenId>, ModelError> {
    if token_ids.is_empty() {
        return Ok(BTreeSet::new());
    }
    Ok(sentence_tree(doc, sentence_id)?.span_roots(token_ids))
}

/// Finds the syntactic head of a span: the token whose governor lies
/// outside the span.
///
/// Returns `Ok(None)` for an empty span, or when every token is governed
/// from inside the span (a cyclic or self-governing span). If several tokens
/// qualify, one of them is returned; which one is unspecified. Use
/// [`head_candidates`] to see them all.
///
/// # Errors
///
/// [`ModelError::SentenceOutOfRange`] if the document has no dependency tree
/// at 1-based position `sentence_id`.
pub fn find_head(
    doc: &Document,
    token_ids: &[TokenId],
    sentence_id: i64,
) -> Result<Option<TokenId>, ModelError> {
    let candidates = head_candidates(doc, token_ids, sentence_id)?;
    Ok(pick_head(candidates, token_ids, sentence_id))
}

/// Head of `token_ids` within `tree`, chosen the same way as [`find_head`].
pub fn find_head_in_tree(tree: &DependencyTree, token_ids: &[TokenId]) -> Option<TokenId> {
    if token_ids.is_empty() {
        return None;
    }
    pick_head(tree.span_roots(token_ids), token_ids, tree.sentence_id)
}

fn pick_head(
    candidates: BTreeSet<TokenId>,
    token_ids: &[TokenId],
    sentence_id: i64,
) -> Option<TokenId> {
    if candidates.len() > 1 {
        log::debug!(
            "span {:?} in sentence {} has {} ungoverned tokens",
            token_ids,
            sentence_id,
            candidates.len()
        );
    }
    candidates.into_iter().next()
}
