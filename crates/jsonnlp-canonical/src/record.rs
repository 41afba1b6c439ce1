use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::marker::PhantomData;

/// Value kind accepted by a typed-record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Str,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
            FieldKind::Str => "str",
        };
        f.write_str(name)
    }
}

/// A value stored in a typed record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(String),
}

impl FieldValue {
    /// Kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Str(_) => FieldKind::Str,
        }
    }

    /// Integer payload, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Float payload, if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// String payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Converts a JSON scalar. Returns `None` for null, arrays and objects.
    ///
    /// JSON integers become [`FieldValue::Int`]; numbers written with a
    /// fraction or exponent become [`FieldValue::Float`].
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::String(s) => Some(FieldValue::Str(s.clone())),
            Value::Number(n) => n
                .as_i64()
                .map(FieldValue::Int)
                .or_else(|| n.as_f64().map(FieldValue::Float)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Renders the value as JSON. Non-finite floats render as null.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Int(v) => Value::Number((*v).into()),
            FieldValue::Float(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
            FieldValue::Bool(v) => Value::Bool(*v),
            FieldValue::Str(v) => Value::String(v.clone()),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Int(v) => serializer.serialize_i64(*v),
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Bool(v) => serializer.serialize_bool(*v),
            FieldValue::Str(v) => serializer.serialize_str(v),
        }
    }
}

/// Closed, ordered set of fields backing a [`TypedRecord`].
///
/// Implemented by a fieldless enum: `FIELDS` lists every variant in
/// declaration order, which is also the export order.
pub trait FieldSet: Copy + Eq + fmt::Debug + 'static {
    /// Every field, in declared order.
    const FIELDS: &'static [Self];

    /// Wire name of the field.
    fn name(self) -> &'static str;

    /// Kind of value the field accepts.
    fn kind(self) -> FieldKind;

    /// Looks a field up by wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::FIELDS.iter().copied().find(|f| f.name() == name)
    }
}

/// Fixed-key, per-key-typed record.
///
/// Writes are total: a write to an undeclared key, or of a value whose kind
/// differs from the field's kind, leaves the record unchanged. Writing `None`
/// unsets a field. Unset fields are omitted from [`TypedRecord::export`] and
/// from serialization.
pub struct TypedRecord<F: FieldSet> {
    values: Vec<Option<FieldValue>>,
    fields: PhantomData<F>,
}

impl<F: FieldSet> TypedRecord<F> {
    /// Creates a record with every field unset.
    pub fn new() -> Self {
        Self {
            values: vec![None; F::FIELDS.len()],
            fields: PhantomData,
        }
    }

    fn slot(field: F) -> usize {
        F::FIELDS
            .iter()
            .position(|f| *f == field)
            .unwrap_or_else(|| unreachable!("{:?} missing from its own field list", field))
    }

    /// Writes `value` to the field named `key`.
    ///
    /// Returns `true` if the write was applied.
    pub fn set(&mut self, key: &str, value: Option<FieldValue>) -> bool {
        match F::from_name(key) {
            Some(field) => self.set_field(field, value),
            None => {
                log::debug!("rejected write to undeclared field '{}'", key);
                false
            }
        }
    }

    /// Writes `value` to `field`.
    ///
    /// Returns `true` if the write was applied.
    pub fn set_field(&mut self, field: F, value: Option<FieldValue>) -> bool {
        if let Some(v) = &value {
            if v.kind() != field.kind() {
                log::debug!(
                    "rejected {} value for field '{}' (expects {})",
                    v.kind(),
                    field.name(),
                    field.kind()
                );
                return false;
            }
        }
        self.values[Self::slot(field)] = value;
        true
    }

    /// Value stored under `key`, if declared and set.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        F::from_name(key).and_then(|field| self.get_field(field))
    }

    /// Value stored for `field`, if set.
    pub fn get_field(&self, field: F) -> Option<&FieldValue> {
        self.values[Self::slot(field)].as_ref()
    }

    /// Whether `field` currently holds a value.
    pub fn is_set(&self, field: F) -> bool {
        self.get_field(field).is_some()
    }

    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Set fields with their values, in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &FieldValue)> + '_ {
        F::FIELDS
            .iter()
            .zip(&self.values)
            .filter_map(|(field, value)| value.as_ref().map(|v| (*field, v)))
    }

    /// JSON object of the set fields, in declared order.
    pub fn export(&self) -> Map<String, Value> {
        self.iter()
            .map(|(field, value)| (field.name().to_string(), value.to_json()))
            .collect()
    }
}

impl<F: FieldSet> Default for TypedRecord<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldSet> Clone for TypedRecord<F> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            fields: PhantomData,
        }
    }
}

impl<F: FieldSet> PartialEq for TypedRecord<F> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<F: FieldSet> fmt::Debug for TypedRecord<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(field, value)| (field.name(), value)))
            .finish()
    }
}

impl<F: FieldSet> Serialize for TypedRecord<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

impl<'de, F: FieldSet> Deserialize<'de> for TypedRecord<F> {
    /// Reads an object permissively: each entry goes through
    /// [`TypedRecord::set`], so undeclared or mistyped entries are dropped.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Map::<String, Value>::deserialize(deserializer)?;
        let mut record = Self::new();
        for (key, value) in &entries {
            match value {
                Value::Null => {
                    record.set(key, None);
                }
                other => match FieldValue::from_json(other) {
                    Some(v) => {
                        record.set(key, Some(v));
                    }
                    None => log::debug!("dropped non-scalar entry '{}'", key),
                },
            }
        }
        Ok(record)
    }
}
