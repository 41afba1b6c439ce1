use jsonnlp_canonical::{
    Clock, FieldKind, FieldSet, FieldValue, Timestamp, TypedRecord, ValidationError,
    FORMAT_VERSION,
};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Key of the counts mapping inside a metadata block.
pub const COUNTS_KEY: &str = "counts";

/// The closed Dublin Core vocabulary of a metadata block, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    /// `DC.conformsTo`: format version the document conforms to.
    ConformsTo,
    /// `DC.author`.
    Author,
    /// `DC.source`: where the text came from.
    Source,
    /// `DC.created`.
    Created,
    /// `DC.date`.
    Date,
    /// `DC.creator`.
    Creator,
    /// `DC.publisher`.
    Publisher,
    /// `DC.title`.
    Title,
    /// `DC.description`.
    Description,
    /// `DC.identifier`.
    Identifier,
    /// `DC.language`.
    Language,
    /// `DC.subject`.
    Subject,
    /// `DC.contributors`.
    Contributors,
    /// `DC.type`.
    Type,
    /// `DC.format`.
    Format,
    /// `DC.relation`.
    Relation,
    /// `DC.coverage`.
    Coverage,
    /// `DC.rights`.
    Rights,
}

impl FieldSet for MetaField {
    const FIELDS: &'static [Self] = &[
        MetaField::ConformsTo,
        MetaField::Author,
        MetaField::Source,
        MetaField::Created,
        MetaField::Date,
        MetaField::Creator,
        MetaField::Publisher,
        MetaField::Title,
        MetaField::Description,
        MetaField::Identifier,
        MetaField::Language,
        MetaField::Subject,
        MetaField::Contributors,
        MetaField::Type,
        MetaField::Format,
        MetaField::Relation,
        MetaField::Coverage,
        MetaField::Rights,
    ];

    fn name(self) -> &'static str {
        match self {
            MetaField::ConformsTo => "DC.conformsTo",
            MetaField::Author => "DC.author",
            MetaField::Source => "DC.source",
            MetaField::Created => "DC.created",
            MetaField::Date => "DC.date",
            MetaField::Creator => "DC.creator",
            MetaField::Publisher => "DC.publisher",
            MetaField::Title => "DC.title",
            MetaField::Description => "DC.description",
            MetaField::Identifier => "DC.identifier",
            MetaField::Language => "DC.language",
            MetaField::Subject => "DC.subject",
            MetaField::Contributors => "DC.contributors",
            MetaField::Type => "DC.type",
            MetaField::Format => "DC.format",
            MetaField::Relation => "DC.relation",
            MetaField::Coverage => "DC.coverage",
            MetaField::Rights => "DC.rights",
        }
    }

    fn kind(self) -> FieldKind {
        FieldKind::Str
    }
}

/// Descriptive metadata of a corpus or a document.
///
/// Every `DC.` field reads as `""` until written. Unset fields are omitted on
/// serialization. Fields explicitly set to `""` and the `counts` mapping
/// (even when empty) are always serialized; they are dropped only when the
/// enclosing corpus or document is pruned.
///
/// `counts` is a free-form mapping: producers usually write integers, but
/// any JSON value read back is kept as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta {
    fields: TypedRecord<MetaField>,
    counts: Map<String, Value>,
}

impl Meta {
    /// Creates a block with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a block carrying the format version and creation time.
    pub fn stamped(clock: &dyn Clock) -> Self {
        let now = clock.timestamp();
        let mut meta = Self::new();
        meta.set_field(MetaField::ConformsTo, FORMAT_VERSION);
        meta.set_timestamp(MetaField::Created, &now);
        meta.set_timestamp(MetaField::Date, &now);
        meta
    }

    /// Value of `field`, `""` if unset.
    pub fn get(&self, field: MetaField) -> &str {
        self.fields
            .get_field(field)
            .and_then(FieldValue::as_str)
            .unwrap_or("")
    }

    /// Writes `field`.
    pub fn set_field(&mut self, field: MetaField, value: impl Into<String>) {
        self.fields
            .set_field(field, Some(FieldValue::Str(value.into())));
    }

    /// Writes a timestamp to `field`.
    pub fn set_timestamp(&mut self, field: MetaField, at: &Timestamp) {
        self.set_field(field, at.as_ref());
    }

    /// Parses `field` as a timestamp. `Ok(None)` if the field is unset or
    /// empty.
    ///
    /// # Errors
    ///
    /// [`ValidationError::PatternMismatch`] if the stored value is not of the
    /// form `YYYY-MM-DDTHH:MM:SS`.
    pub fn timestamp(&self, field: MetaField) -> Result<Option<Timestamp>, ValidationError> {
        match self.get(field) {
            "" => Ok(None),
            value => Timestamp::parse(value).map(Some),
        }
    }

    /// Unsets `field`.
    pub fn clear(&mut self, field: MetaField) {
        self.fields.set_field(field, None);
    }

    /// Writes by wire name; see [`TypedRecord::set`].
    pub fn set(&mut self, key: &str, value: Option<FieldValue>) -> bool {
        self.fields.set(key, value)
    }

    /// The underlying record.
    pub fn record(&self) -> &TypedRecord<MetaField> {
        &self.fields
    }

    /// Counts mapping (e.g. `tokens`, `sentences`).
    pub fn counts(&self) -> &Map<String, Value> {
        &self.counts
    }

    /// Mutable counts mapping, for non-integer entries.
    pub fn counts_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.counts
    }

    /// Sets one count.
    pub fn set_count(&mut self, key: impl Into<String>, count: u64) {
        self.counts.insert(key.into(), Value::from(count));
    }

    /// Whether no field is set and no count recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.counts.is_empty()
    }
}

impl Serialize for Meta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, value) in self.fields.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.serialize_entry(COUNTS_KEY, &self.counts)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Meta {
    /// Unknown keys and non-string field values are dropped, as for any
    /// typed-record write. Malformed `DC.created` / `DC.date` values are kept
    /// but logged.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Map::<String, Value>::deserialize(deserializer)?;
        let mut meta = Meta::new();
        for (key, value) in entries {
            if key == COUNTS_KEY {
                match value {
                    Value::Object(counts) => meta.counts = counts,
                    Value::Null => {}
                    other => log::debug!("dropped non-object counts: {}", other),
                }
                continue;
            }
            match (&value, FieldValue::from_json(&value)) {
                (Value::Null, _) => {
                    meta.set(&key, None);
                }
                (_, Some(v)) => {
                    meta.set(&key, Some(v));
                }
                (_, None) => log::debug!("dropped non-scalar metadata entry '{}'", key),
            }
        }
        for field in [MetaField::Created, MetaField::Date] {
            if let Err(err) = meta.timestamp(field) {
                log::warn!("{}: {}", field.name(), err);
            }
        }
        Ok(meta)
    }
}
