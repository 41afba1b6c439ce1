//! Property-based tests for pruning.

use jsonnlp_canonical::{is_empty_value, prune};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::String(String::new())),
        "[a-z]{1,4}".prop_map(Value::String),
        (-2i64..3).prop_map(Value::from),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
        Just(Value::Array(vec![])),
        Just(Value::Object(Map::new())),
    ]
}

fn flat_object() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-e]", scalar()), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect()))
}

fn corpus_like() -> impl Strategy<Value = Value> {
    (
        flat_object(),
        flat_object(),
        prop::collection::vec((flat_object(), flat_object()), 0..4),
    )
        .prop_map(|(mut root, meta, docs)| {
            let docs = docs
                .into_iter()
                .map(|(mut doc, doc_meta)| {
                    doc.as_object_mut()
                        .unwrap()
                        .insert("meta".to_string(), doc_meta);
                    doc
                })
                .collect();
            let map = root.as_object_mut().unwrap();
            map.insert("meta".to_string(), meta);
            map.insert("documents".to_string(), Value::Array(docs));
            root
        })
}

proptest! {
    #[test]
    fn prune_is_idempotent(value in corpus_like()) {
        let once = prune(&value);
        prop_assert_eq!(prune(&once), once);
    }

    #[test]
    fn pruned_top_level_has_no_empty_values(value in corpus_like()) {
        let pruned = prune(&value);
        for (key, child) in pruned.as_object().unwrap() {
            prop_assert!(!is_empty_value(child), "{} survived pruning", key);
        }
    }

    #[test]
    fn prune_never_drops_non_empty_scalars(value in flat_object()) {
        let pruned = prune(&value);
        for (key, child) in value.as_object().unwrap() {
            if !is_empty_value(child) {
                prop_assert_eq!(pruned.get(key), Some(child));
            }
        }
    }
}
