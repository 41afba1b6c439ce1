use jsonnlp_core::{find_head, head_candidates, Document, ModelError};
use proptest::prelude::*;

/// Sentence 1: "the big dog", with token 2 governing tokens 1 and 3.
fn make_document() -> Document {
    let mut doc = Document::new(0);
    let tree = doc.add_dependency_tree(1);
    tree.add_arc("amod", 2, 1);
    tree.add_arc("det", 2, 3);
    doc
}

#[test]
fn head_of_full_span_is_the_governor() {
    let doc = make_document();
    assert_eq!(find_head(&doc, &[1, 2, 3], 1).unwrap(), Some(2));
    assert_eq!(doc.find_head(&[3, 2], 1).unwrap(), Some(2));
}

#[test]
fn empty_span_has_no_head() {
    let doc = make_document();
    assert_eq!(find_head(&doc, &[], 1).unwrap(), None);
}

#[test]
fn empty_span_does_not_consult_the_sentence() {
    let doc = Document::new(0);
    assert_eq!(find_head(&doc, &[], 99).unwrap(), None);
}

#[test]
fn span_without_its_governor_returns_one_of_the_roots() {
    let doc = make_document();
    let head = find_head(&doc, &[1, 3], 1).unwrap();
    assert!(matches!(head, Some(1) | Some(3)));
    assert_eq!(
        head_candidates(&doc, &[1, 3], 1).unwrap().into_iter().collect::<Vec<_>>(),
        vec![1, 3]
    );
}

#[test]
fn self_governing_span_has_no_head() {
    let mut doc = Document::new(0);
    doc.add_dependency_tree(1).add_arc("dep", 5, 5);
    assert_eq!(find_head(&doc, &[5], 1).unwrap(), None);
}

#[test]
fn arcs_are_applied_in_order_against_remaining_candidates() {
    let mut doc = Document::new(0);
    let tree = doc.add_dependency_tree(1);
    tree.add_arc("x", 1, 2);
    tree.add_arc("y", 2, 1);
    // The first arc removes 2, so the second no longer has both ends in the set.
    assert_eq!(find_head(&doc, &[1, 2], 1).unwrap(), Some(1));
}

#[test]
fn arcs_leaving_the_span_are_ignored() {
    let mut doc = make_document();
    doc.dependencies[0].add_arc("root", 0, 2);
    assert_eq!(find_head(&doc, &[1, 2, 3], 1).unwrap(), Some(2));
}

#[test]
fn sentence_index_is_one_based() {
    let mut doc = make_document();
    doc.add_dependency_tree(2).add_arc("nsubj", 5, 4);
    assert_eq!(find_head(&doc, &[4, 5], 2).unwrap(), Some(5));
}

#[test]
fn out_of_range_sentence_fails_loudly() {
    let doc = make_document();
    for sentence_id in [0, 2, -1] {
        let err = find_head(&doc, &[1], sentence_id).unwrap_err();
        assert!(matches!(
            err,
            ModelError::SentenceOutOfRange { available: 1, .. }
        ));
    }
}

#[test]
fn fill_clause_heads_backfills_only_unset_heads() {
    let mut doc = make_document();
    doc.add_clause(1).tokens = vec![1, 2, 3];
    let spanned = doc.add_clause(1);
    spanned.token_from = 1;
    spanned.token_to = 2;
    doc.add_clause(1).head = 3;
    doc.add_clause(1);

    assert_eq!(doc.fill_clause_heads().unwrap(), 2);
    let heads: Vec<i64> = doc.clauses.iter().map(|c| c.head).collect();
    assert_eq!(heads, vec![2, 2, 3, -1]);
}

#[test]
fn fill_clause_heads_surfaces_bad_sentence_ids() {
    let mut doc = make_document();
    doc.add_clause(3).tokens = vec![1];
    assert!(matches!(
        doc.fill_clause_heads(),
        Err(ModelError::MissingDependencyTree { sentence_id: 3 })
    ));
}

#[test]
fn fill_clause_heads_matches_ids_from_add_sentence() {
    let mut doc = Document::new(0);
    let first = doc.add_sentence().id;
    let second = doc.add_sentence().id;
    assert_eq!((first, second), (0, 1));

    let tree = doc.add_dependency_tree(first);
    tree.add_arc("amod", 2, 1);
    tree.add_arc("det", 2, 3);
    doc.add_dependency_tree(second).add_arc("nsubj", 5, 4);
    doc.add_clause(first).tokens = vec![1, 2, 3];
    doc.add_clause(second).tokens = vec![4, 5];

    assert_eq!(doc.fill_clause_heads().unwrap(), 2);
    let heads: Vec<i64> = doc.clauses.iter().map(|c| c.head).collect();
    assert_eq!(heads, vec![2, 5]);
}

#[test]
fn fill_clause_heads_ignores_tree_position() {
    let mut doc = Document::new(0);
    doc.add_dependency_tree(1).add_arc("nsubj", 5, 4);
    doc.add_dependency_tree(0).add_arc("det", 2, 1);
    doc.add_clause(0).tokens = vec![1, 2];

    assert_eq!(doc.fill_clause_heads().unwrap(), 1);
    assert_eq!(doc.clauses[0].head, 2);
}

proptest! {
    #[test]
    fn head_is_in_span_and_not_governed_from_inside(
        arcs in prop::collection::vec((0i64..8, 0i64..8), 0..12),
        span in prop::collection::btree_set(0i64..8, 1..6),
    ) {
        let mut doc = Document::new(0);
        let tree = doc.add_dependency_tree(1);
        for (gov, dep) in &arcs {
            if gov != dep {
                tree.add_arc("dep", *gov, *dep);
            }
        }
        let span: Vec<i64> = span.into_iter().collect();

        let candidates = head_candidates(&doc, &span, 1).unwrap();
        let head = find_head(&doc, &span, 1).unwrap();

        prop_assert!(candidates.iter().all(|c| span.contains(c)));
        match head {
            Some(h) => prop_assert!(candidates.contains(&h)),
            None => prop_assert!(candidates.is_empty()),
        }
    }

    #[test]
    fn chain_root_is_always_a_candidate(len in 1i64..10) {
        let mut doc = Document::new(0);
        let tree = doc.add_dependency_tree(1);
        for dep in 1..len {
            tree.add_arc("dep", dep - 1, dep);
        }
        let span: Vec<i64> = (0..len).collect();

        let candidates = head_candidates(&doc, &span, 1).unwrap();
        prop_assert!(candidates.contains(&0));
        prop_assert!(find_head(&doc, &span, 1).unwrap().is_some());
    }
}
