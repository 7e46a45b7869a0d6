//! The dynamic attribute value type.
//!
//! Node attributes, edge attributes, graph metadata, and list/map elements
//! all share this one heterogeneous `Value` domain rather than being
//! parametrized per use site (see the design notes in `SPEC_FULL.md`).

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered `String -> Value` mapping, used for edge attributes and graph
/// metadata. Insertion order is preserved so serialization is stable.
///
/// Node attributes use [`crate::observed::ObservedMap`] instead, which wraps
/// this same ordered map with change callbacks.
pub type AttributeMap = IndexMap<String, Value>;

/// A dynamically typed attribute value.
///
/// Equality is deep-structural: `Null == Null`, `Bool`s compare by value,
/// `Int`/`Float` compare numerically (mixed `Int`/`Float` comparisons cast
/// the `Int` side to `f64`), `NaN` is never equal to anything including
/// itself, `String`s compare byte-exact, `List`s element-wise, and `Map`s by
/// key set plus per-key value equality (insertion order does not matter for
/// equality, only for serialization).
///
/// This derives the plain (externally tagged) serde representation, which is
/// what the binary codec (`binary.rs`) relies on for a self-describing,
/// bit-exact round trip through `bincode`. The JSON codec (`json.rs`) does
/// *not* use this derive: it hand-converts to/from `serde_json::Value` so
/// that attributes serialize as native JSON (`5`, `5.0`, `"x"`, `[...]`,
/// `{...}`) instead of the tagged shape this derive would produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(AttributeMap),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Coerce to a `String` the way the LGF random-walk edge-type
    /// interleaving does: strings pass through, everything else uses its
    /// display form.
    pub fn coerce_to_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_equals_null() {
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn nan_never_equal() {
        let nan = Value::Float(f64::NAN);
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn int_float_cross_equality() {
        assert_eq!(Value::Int(5), Value::Float(5.0));
        assert_eq!(Value::Float(5.0), Value::Int(5));
        assert_ne!(Value::Int(5), Value::Float(5.5));
    }

    #[test]
    fn list_element_wise() {
        let a = Value::List(vec![Value::Int(1), Value::String("x".into())]);
        let b = Value::List(vec![Value::Int(1), Value::String("x".into())]);
        assert_eq!(a, b);
    }

    #[test]
    fn map_ignores_insertion_order() {
        let mut a = AttributeMap::new();
        a.insert("x".to_string(), Value::Int(1));
        a.insert("y".to_string(), Value::Int(2));
        let mut b = AttributeMap::new();
        b.insert("y".to_string(), Value::Int(2));
        b.insert("x".to_string(), Value::Int(1));
        assert_eq!(Value::Map(a), Value::Map(b));
    }

    #[test]
    fn different_kinds_not_equal() {
        assert_ne!(Value::Null, Value::Bool(false));
        assert_ne!(Value::String("1".into()), Value::Int(1));
    }
}
