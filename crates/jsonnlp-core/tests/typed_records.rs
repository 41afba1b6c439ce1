use chrono::NaiveDate;
use jsonnlp_canonical::{prune, FieldSet, FieldValue, FixedClock, Timestamp, ValidationError};
use jsonnlp_core::{Document, Meta, MetaField, Triple, TripleField};
use serde_json::json;

#[test]
fn triple_has_exactly_twelve_keys() {
    let names: Vec<&str> = TripleField::FIELDS.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        vec![
            "clauseID",
            "fromEntity",
            "toEntity",
            "rel",
            "sentenceID",
            "directional",
            "eventID",
            "tempSeq",
            "prob",
            "syntactic",
            "implied",
            "presupposed",
        ]
    );
}

#[test]
fn new_triple_exports_only_identifying_keys() {
    let triple = Triple::new(1, 2, 3, 4);
    assert_eq!(
        serde_json::to_value(&triple).unwrap(),
        json!({"clauseID": 1, "fromEntity": 2, "toEntity": 3, "rel": 4})
    );
    assert_eq!(triple.directional(), None);
    assert_eq!(triple.prob(), None);
}

#[test]
fn string_written_to_directional_is_dropped() {
    let mut triple = Triple::new(1, 2, 3, 4);
    assert!(!triple.set("directional", Some("yes".into())));
    assert_eq!(triple.get("directional"), None);

    assert!(triple.set("directional", Some(true.into())));
    assert_eq!(triple.directional(), Some(true));
}

#[test]
fn mistyped_write_keeps_previous_value() {
    let mut triple = Triple::new(1, 2, 3, 4);
    triple.set_clause_id(5);
    assert!(!triple.set("clauseID", Some(5.5.into())));
    assert!(!triple.set("prob", Some(1i64.into())));
    assert!(!triple.set("subject", Some(1i64.into())));
    assert_eq!(triple.clause_id(), Some(5));
    assert_eq!(triple.prob(), None);
    assert_eq!(triple.get("subject"), None);
}

#[test]
fn provenance_flags_set_and_unset_independently() {
    let mut triple = Triple::new(0, 0, 1, 0);
    triple.set_syntactic();
    triple.set_implied();
    triple.unset_syntactic();

    assert_eq!(triple.syntactic(), None);
    assert_eq!(triple.implied(), Some(true));

    triple.set_presupposed();
    triple.unset_presupposed();
    assert_eq!(triple.presupposed(), None);
}

#[test]
fn export_keeps_declared_order() {
    let mut triple = Triple::new(0, 1, 2, 3);
    triple.set_prob(0.75);
    triple.set_temp_seq(2);
    triple.set_sentence_id(1);
    triple.set_event_id(9);

    assert_eq!(
        serde_json::to_string(&triple).unwrap(),
        r#"{"clauseID":0,"fromEntity":1,"toEntity":2,"rel":3,"sentenceID":1,"eventID":9,"tempSeq":2,"prob":0.75}"#
    );
    assert_eq!(triple.export().len(), 8);
}

#[test]
fn triple_reads_permissively() {
    let triple: Triple = serde_json::from_value(json!({
        "clauseID": 1,
        "fromEntity": "two",
        "toEntity": 3,
        "rel": 4,
        "implied": true,
        "weight": 1
    }))
    .unwrap();

    assert_eq!(triple.from_entity(), None);
    assert_eq!(triple.to_entity(), Some(3));
    assert_eq!(triple.implied(), Some(true));
    assert_eq!(triple.get("weight"), None);
}

#[test]
fn meta_vocabulary_is_fixed_and_ordered() {
    let names: Vec<&str> = MetaField::FIELDS.iter().map(|f| f.name()).collect();
    assert_eq!(names.len(), 18);
    assert_eq!(names[0], "DC.conformsTo");
    assert_eq!(names[3], "DC.created");
    assert_eq!(names[10], "DC.language");
    assert_eq!(names[17], "DC.rights");
    assert!(names.iter().all(|n| n.starts_with("DC.")));
}

#[test]
fn meta_rejects_non_string_and_unknown_writes() {
    let mut meta = Meta::new();
    assert!(meta.set("DC.language", Some("en".into())));
    assert!(!meta.set("DC.language", Some(1i64.into())));
    assert!(!meta.set("DC.mood", Some("happy".into())));
    assert_eq!(meta.get(MetaField::Language), "en");
    assert_eq!(meta.record().get("DC.mood"), None);
}

#[test]
fn meta_serializes_set_fields_then_counts() {
    let mut meta = Meta::new();
    meta.set_field(MetaField::Rights, "CC-BY");
    meta.set_field(MetaField::Author, "");
    meta.set_count("tokens", 12);

    assert_eq!(
        serde_json::to_string(&meta).unwrap(),
        r#"{"DC.author":"","DC.rights":"CC-BY","counts":{"tokens":12}}"#
    );

    meta.clear(MetaField::Author);
    assert_eq!(meta.record().get("DC.author"), None);
}

#[test]
fn meta_reads_permissively() {
    let meta: Meta = serde_json::from_value(json!({
        "DC.title": "News",
        "DC.date": 2019,
        "DC.unknown": "x",
        "counts": {"sentences": 3}
    }))
    .unwrap();

    assert_eq!(meta.get(MetaField::Title), "News");
    assert_eq!(meta.get(MetaField::Date), "");
    assert_eq!(meta.counts().get("sentences"), Some(&json!(3)));
    assert_eq!(
        meta.record().get("DC.title"),
        Some(&FieldValue::Str("News".into()))
    );
}

#[test]
fn meta_keeps_every_count_it_reads() {
    let input = json!({
        "DC.language": "en",
        "counts": {"tokens": 12, "sentences": 2, "avgLen": 6.5, "source": "ud"}
    });
    let meta: Meta = serde_json::from_value(input.clone()).unwrap();

    assert_eq!(meta.counts().get("tokens"), Some(&json!(12)));
    assert_eq!(meta.counts().get("avgLen"), Some(&json!(6.5)));
    assert_eq!(meta.counts().len(), 4);
    assert_eq!(serde_json::to_value(&meta).unwrap(), input);
}

#[test]
fn meta_drops_non_object_counts() {
    let meta: Meta = serde_json::from_value(json!({"counts": [1, 2]})).unwrap();
    assert!(meta.counts().is_empty());
}

#[test]
fn empty_meta_entries_survive_serialization_until_pruned() {
    let mut doc = Document::new(0);
    doc.meta.set_field(MetaField::Title, "");

    let value = doc.to_value().unwrap();
    assert_eq!(value["meta"], json!({"DC.title": "", "counts": {}}));
    assert!(prune(&value).get("meta").is_none());
}

#[test]
fn stamped_meta_timestamps_parse() {
    let at = NaiveDate::from_ymd_opt(2019, 1, 25)
        .unwrap()
        .and_hms_opt(17, 4, 34)
        .unwrap();
    let meta = Meta::stamped(&FixedClock(at));

    let expected = Timestamp::parse("2019-01-25T17:04:34").unwrap();
    assert_eq!(meta.timestamp(MetaField::Created).unwrap(), Some(expected.clone()));
    assert_eq!(meta.timestamp(MetaField::Date).unwrap(), Some(expected));
    assert_eq!(meta.timestamp(MetaField::Title).unwrap(), None);
}

#[test]
fn malformed_timestamps_are_kept_but_rejected_on_parse() {
    let meta: Meta =
        serde_json::from_value(json!({"DC.created": "25/01/2019 17:04"})).unwrap();

    assert_eq!(meta.get(MetaField::Created), "25/01/2019 17:04");
    assert!(matches!(
        meta.timestamp(MetaField::Created),
        Err(ValidationError::PatternMismatch { field: "Timestamp", .. })
    ));
}
