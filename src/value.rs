//! Typed values stored in a preference store

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Set of strings as stored in a preference store
pub type StringSet = BTreeSet<String>;

/// A single stored preference value
///
/// Serialized as `{"type": "<kind>", "value": <payload>}` so the kind written
/// is the kind read back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Int(i32),
    Boolean(bool),
    Long(i64),
    Float(f32),
    String(String),
    StringSet(StringSet),
}

/// The kind of a [`Value`], without its payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Boolean,
    Long,
    Float,
    String,
    StringSet,
}

impl Value {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Long(_) => ValueKind::Long,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::StringSet(_) => ValueKind::StringSet,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::Boolean => "boolean",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::StringSet => "string set",
        };
        f.write_str(name)
    }
}

/// A Rust type that maps onto exactly one [`ValueKind`]
///
/// Implemented for `i32`, `bool`, `i64`, `f32`, `String` and [`StringSet`].
pub trait PreferenceValue: Clone + Sized {
    /// The kind this type is stored as
    const KIND: ValueKind;

    /// Wrap this value for storage
    fn into_value(self) -> Value;

    /// Unwrap a stored value, or `None` if it holds a different kind
    fn from_value(value: Value) -> Option<Self>;

    /// The value returned when nothing is stored and no default was given
    fn zero() -> Self;
}

impl PreferenceValue for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }

    fn zero() -> Self {
        0
    }
}

impl PreferenceValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn into_value(self) -> Value {
        Value::Boolean(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Boolean(v) => Some(v),
            _ => None,
        }
    }

    fn zero() -> Self {
        false
    }
}

impl PreferenceValue for i64 {
    const KIND: ValueKind = ValueKind::Long;

    fn into_value(self) -> Value {
        Value::Long(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    fn zero() -> Self {
        0
    }
}

impl PreferenceValue for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    fn zero() -> Self {
        0.0
    }
}

impl PreferenceValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    fn zero() -> Self {
        String::new()
    }
}

impl PreferenceValue for StringSet {
    const KIND: ValueKind = ValueKind::StringSet;

    fn into_value(self) -> Value {
        Value::StringSet(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::StringSet(v) => Some(v),
            _ => None,
        }
    }

    fn zero() -> Self {
        StringSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_match_platform_defaults() {
        assert_eq!(i32::zero(), 0);
        assert!(!bool::zero());
        assert_eq!(i64::zero(), 0);
        assert_eq!(f32::zero(), 0.0);
        assert_eq!(String::zero(), "");
        assert!(StringSet::zero().is_empty());
    }

    #[test]
    fn from_value_rejects_other_kinds() {
        assert_eq!(i32::from_value(Value::Long(15)), None);
        assert_eq!(i64::from_value(Value::Int(15)), None);
        assert_eq!(String::from_value(Value::Boolean(true)), None);
        assert_eq!(bool::from_value(Value::Boolean(true)), Some(true));
    }

    #[test]
    fn serialized_form_keeps_the_kind() {
        let json = serde_json::to_string(&Value::Long(15)).unwrap();
        assert_eq!(json, r#"{"type":"long","value":15}"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), ValueKind::Long);
    }
}
