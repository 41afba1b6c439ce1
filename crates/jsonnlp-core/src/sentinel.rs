use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Integer sentinel: "not annotated".
pub const UNSET: i64 = -1;
/// Confidence sentinel: "no score".
pub const UNSET_PROB: f64 = -1.0;

/// Identifier of a token within its document.
pub type TokenId = i64;

pub(crate) fn is_unset(value: &i64) -> bool {
    *value == UNSET
}

#[allow(clippy::float_cmp)]
pub(crate) fn is_unset_prob(value: &f64) -> bool {
    *value == UNSET_PROB
}

pub(crate) fn unset_int() -> i64 {
    UNSET
}

pub(crate) fn unset_prob() -> f64 {
    UNSET_PROB
}

/// Tri-state boolean annotation.
///
/// Serialized as a JSON boolean; [`Flag::Unset`] (raw `-1`) is omitted.
/// Deserialization also accepts the raw integer form (`-1`, `0`, `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flag {
    /// Not annotated.
    #[default]
    Unset,
    /// Annotated false.
    No,
    /// Annotated true.
    Yes,
}

impl Flag {
    /// Whether the flag carries no annotation.
    pub fn is_unset(&self) -> bool {
        *self == Flag::Unset
    }

    /// The annotated value, if any.
    pub fn get(self) -> Option<bool> {
        match self {
            Flag::Unset => None,
            Flag::No => Some(false),
            Flag::Yes => Some(true),
        }
    }

    /// Integer encoding: `-1` unset, `0` false, `1` true.
    pub fn raw(self) -> i64 {
        match self {
            Flag::Unset => UNSET,
            Flag::No => 0,
            Flag::Yes => 1,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Yes
        } else {
            Flag::No
        }
    }
}

impl From<Option<bool>> for Flag {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Flag::Unset, Flag::from)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(b) => serializer.serialize_bool(b),
            None => serializer.serialize_i64(UNSET),
        }
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(Flag::from(b)),
            Raw::Int(UNSET) => Ok(Flag::Unset),
            Raw::Int(0) => Ok(Flag::No),
            Raw::Int(1) => Ok(Flag::Yes),
            Raw::Int(other) => Err(de::Error::custom(format!(
                "flag must be a boolean or -1/0/1, got {}",
                other
            ))),
        }
    }
}

/// Reference into an external lexical resource (FrameNet, WordNet, VerbNet).
///
/// Resources disagree on whether ids are integers or floats; the kind the
/// producer wrote is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Integer-typed id.
    Int(i64),
    /// Float-typed id.
    Float(f64),
}

impl ResourceId {
    /// Sentinel: "no reference".
    pub const UNSET: ResourceId = ResourceId::Float(UNSET_PROB);

    /// Whether this is the sentinel, in either kind.
    pub fn is_unset(&self) -> bool {
        match self {
            ResourceId::Int(v) => is_unset(v),
            ResourceId::Float(v) => is_unset_prob(v),
        }
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        ResourceId::UNSET
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        ResourceId::Int(value)
    }
}

impl From<f64> for ResourceId {
    fn from(value: f64) -> Self {
        ResourceId::Float(value)
    }
}
