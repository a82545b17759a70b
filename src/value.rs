//! Dynamic values interpolated into templates
//!
//! [`Value`] is the crate's expression type: everything a template slot,
//! collection, or condition can hold. It is an explicit tagged union so the
//! helpers dispatch on a known shape instead of re-inspecting arguments.

use crate::error::TemplateResult;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A dynamic value carried through templates and helpers.
///
/// `Map` is backed by [`IndexMap`] so entry order is insertion order; the
/// iteration and tag helpers rely on that ordering being stable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

/// Total classification of a value's "nothing to render" status.
///
/// Every value falls into exactly one class; anything that is not
/// [`Emptiness::Present`] renders as nothing in conditional helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emptiness {
    Absent,
    False,
    Zero,
    EmptyString,
    EmptySequence,
    EmptyMapping,
    Present,
}

impl Value {
    /// Classify this value for conditional rendering.
    pub fn emptiness(&self) -> Emptiness {
        match self {
            Value::Null => Emptiness::Absent,
            Value::Bool(false) => Emptiness::False,
            Value::Int(0) => Emptiness::Zero,
            Value::Float(f) if *f == 0.0 => Emptiness::Zero,
            Value::Str(s) if s.is_empty() => Emptiness::EmptyString,
            Value::List(items) if items.is_empty() => Emptiness::EmptySequence,
            Value::Map(entries) if entries.is_empty() => Emptiness::EmptyMapping,
            _ => Emptiness::Present,
        }
    }

    /// True for every class except [`Emptiness::Present`].
    pub fn is_empty_value(&self) -> bool {
        self.emptiness() != Emptiness::Present
    }

    /// Convert any serializable context value into a [`Value`].
    pub fn from_serialize<T: Serialize>(context: &T) -> TemplateResult<Value> {
        Ok(serde_json::to_value(context)?.into())
    }
}

impl fmt::Display for Value {
    /// The stringification used when a value lands in a template slot.
    ///
    /// `Null` renders as nothing, lists join their elements with commas,
    /// and maps render as compact JSON. No other normalization happens at
    /// interpolation time.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Map(_) => f.write_str(&serde_json::Value::from(self.clone()).to_string()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::Float(x) => serde_json::Number::from_f64(x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}
