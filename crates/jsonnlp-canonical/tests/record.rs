use jsonnlp_canonical::{FieldKind, FieldSet, FieldValue, TypedRecord};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Start,
    Weight,
    Closed,
    Label,
}

impl FieldSet for Span {
    const FIELDS: &'static [Self] = &[Span::Start, Span::Weight, Span::Closed, Span::Label];

    fn name(self) -> &'static str {
        match self {
            Span::Start => "start",
            Span::Weight => "weight",
            Span::Closed => "closed",
            Span::Label => "label",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Span::Start => FieldKind::Int,
            Span::Weight => FieldKind::Float,
            Span::Closed => FieldKind::Bool,
            Span::Label => FieldKind::Str,
        }
    }
}

#[test]
fn fresh_record_is_unset_and_exports_nothing() {
    let record = TypedRecord::<Span>::new();
    assert!(record.is_empty());
    assert!(Span::FIELDS.iter().all(|f| !record.is_set(*f)));
    assert_eq!(serde_json::to_value(&record).unwrap(), json!({}));
}

#[test]
fn matching_writes_are_stored() {
    let mut record = TypedRecord::<Span>::new();
    assert!(record.set("start", Some(4i64.into())));
    assert!(record.set("closed", Some(true.into())));
    assert_eq!(record.get("start"), Some(&FieldValue::Int(4)));
    assert_eq!(record.get_field(Span::Closed), Some(&FieldValue::Bool(true)));
}

#[test]
fn mistyped_writes_keep_the_prior_value() {
    let mut record = TypedRecord::<Span>::new();
    record.set("start", Some(4i64.into()));

    assert!(!record.set("start", Some("four".into())));
    assert!(!record.set("start", Some(4.0.into())));
    assert!(!record.set("start", Some(true.into())));
    assert!(!record.set("weight", Some(1i64.into())));

    assert_eq!(record.get("start"), Some(&FieldValue::Int(4)));
    assert_eq!(record.get("weight"), None);
}

#[test]
fn undeclared_keys_are_ignored() {
    let mut record = TypedRecord::<Span>::new();
    assert!(!record.set("end", Some(9i64.into())));
    assert_eq!(record.get("end"), None);
    assert!(record.is_empty());
}

#[test]
fn writing_none_unsets() {
    let mut record = TypedRecord::<Span>::new();
    record.set("label", Some("NP".into()));
    assert!(record.set("label", None));
    assert!(!record.is_set(Span::Label));
}

#[test]
fn export_follows_declared_order_not_write_order() {
    let mut record = TypedRecord::<Span>::new();
    record.set("label", Some("NP".into()));
    record.set("start", Some(2i64.into()));
    record.set("weight", Some(0.5.into()));

    let keys: Vec<String> = record.export().keys().cloned().collect();
    assert_eq!(keys, vec!["start", "weight", "label"]);
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"start":2,"weight":0.5,"label":"NP"}"#
    );
}

#[test]
fn deserialization_applies_the_same_write_rules() {
    let record: TypedRecord<Span> = serde_json::from_value(json!({
        "start": "oops",
        "weight": 0.25,
        "closed": false,
        "label": null,
        "extra": 1,
        "nested": {"a": 1}
    }))
    .unwrap();

    assert_eq!(record.get("start"), None);
    assert_eq!(record.get("weight"), Some(&FieldValue::Float(0.25)));
    assert_eq!(record.get("closed"), Some(&FieldValue::Bool(false)));
    assert_eq!(record.get("label"), None);
    assert_eq!(record.get("extra"), None);
}

#[test]
fn field_value_reads_json_scalars() {
    assert_eq!(FieldValue::from_json(&json!(3)), Some(FieldValue::Int(3)));
    assert_eq!(FieldValue::from_json(&json!(3.0)), Some(FieldValue::Float(3.0)));
    assert_eq!(FieldValue::from_json(&json!(null)), None);
    assert_eq!(FieldValue::from_json(&json!([1])), None);
    assert_eq!(FieldValue::Float(f64::NAN).to_json(), json!(null));
}
