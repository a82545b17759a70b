//! Iteration and conditional rendering helpers

use crate::error::TemplateResult;
use crate::value::Value;
use std::fmt;
use tracing::trace;

/// Key handed to an [`each`] callback alongside the element value.
///
/// Sequences and integer ranges yield positional indexes; mappings yield
/// entry names. Displays as the bare index or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Walk a collection and concatenate the callback's rendered chunks.
///
/// - `Value::Int(n)` with `n >= 0` iterates the range `0..n`, passing each
///   index as both element and key.
/// - `Value::List` iterates elements in sequence order with their index.
/// - `Value::Map` iterates entries in insertion order with their name.
///
/// A `Some(chunk)` return is appended to the accumulator; `None` contributes
/// nothing. Any other collection shape renders as `""` without an error.
pub fn each<F>(collection: &Value, mut callback: F) -> String
where
    F: FnMut(&Value, Key<'_>) -> Option<String>,
{
    let mut rendered = String::new();
    match collection {
        Value::Int(count) if *count >= 0 => {
            for index in 0..*count {
                let element = Value::Int(index);
                if let Some(chunk) = callback(&element, Key::Index(index as usize)) {
                    rendered.push_str(&chunk);
                }
            }
        }
        Value::List(elements) => {
            for (index, element) in elements.iter().enumerate() {
                if let Some(chunk) = callback(element, Key::Index(index)) {
                    rendered.push_str(&chunk);
                }
            }
        }
        Value::Map(entries) => {
            for (name, element) in entries {
                if let Some(chunk) = callback(element, Key::Name(name)) {
                    rendered.push_str(&chunk);
                }
            }
        }
        _ => {
            trace!("each called with a non-iterable value, rendering nothing");
        }
    }
    rendered
}

/// A condition for [`render_if`]: an already-evaluated value, or a fallible
/// closure evaluated on demand.
pub enum Condition<'a> {
    Value(Value),
    Lazy(Box<dyn FnOnce() -> TemplateResult<Value> + 'a>),
}

impl<'a> Condition<'a> {
    /// Defer evaluation to `eval`; an `Err` result renders as `""`.
    pub fn lazy<F>(eval: F) -> Self
    where
        F: FnOnce() -> TemplateResult<Value> + 'a,
    {
        Condition::Lazy(Box::new(eval))
    }
}

impl From<Value> for Condition<'_> {
    fn from(value: Value) -> Self {
        Condition::Value(value)
    }
}

impl From<bool> for Condition<'_> {
    fn from(b: bool) -> Self {
        Condition::Value(Value::from(b))
    }
}

impl From<i64> for Condition<'_> {
    fn from(i: i64) -> Self {
        Condition::Value(Value::from(i))
    }
}

impl From<f64> for Condition<'_> {
    fn from(x: f64) -> Self {
        Condition::Value(Value::from(x))
    }
}

impl From<&str> for Condition<'_> {
    fn from(s: &str) -> Self {
        Condition::Value(Value::from(s))
    }
}

impl From<String> for Condition<'_> {
    fn from(s: String) -> Self {
        Condition::Value(Value::from(s))
    }
}

impl From<Vec<Value>> for Condition<'_> {
    fn from(items: Vec<Value>) -> Self {
        Condition::Value(Value::from(items))
    }
}

/// Render `render(&value)` when the condition evaluates to a present value.
///
/// Lazy conditions that fail, and values that classify as empty (absent,
/// false, zero, empty string, empty sequence, empty mapping), render as
/// `""` without invoking `render`. Failures never propagate to the caller.
pub fn render_if<'a, R>(condition: impl Into<Condition<'a>>, render: R) -> String
where
    R: FnOnce(&Value) -> String,
{
    let evaluated = match condition.into() {
        Condition::Value(value) => value,
        Condition::Lazy(eval) => match eval() {
            Ok(value) => value,
            Err(error) => {
                trace!(%error, "condition evaluation failed, rendering nothing");
                return String::new();
            }
        },
    };

    if evaluated.is_empty_value() {
        return String::new();
    }
    render(&evaluated)
}
