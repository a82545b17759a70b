//! Template invocations and raw/safe rendering
//!
//! A template invocation is an explicit pair of ordered sequences: literal
//! string segments and the expression values slotted between them. The
//! segment/value count invariant is checked once when the [`Template`] is
//! built; rendering is then infallible.

use crate::error::{TemplateError, TemplateResult};
use crate::escape::escape_html;
use crate::value::Value;
use tracing::debug;

/// A literal template invocation: fixed segments interleaved with values.
///
/// Always holds exactly one more segment than values, so the rendered form
/// is `S0 E1 S1 E2 ... En Sn`.
#[derive(Debug, Clone)]
pub struct Template<'a> {
    segments: &'a [&'a str],
    values: &'a [Value],
}

impl<'a> Template<'a> {
    /// Build an invocation, rejecting mismatched segment/value counts.
    pub fn new(segments: &'a [&'a str], values: &'a [Value]) -> TemplateResult<Self> {
        if segments.len() != values.len() + 1 {
            return Err(TemplateError::SegmentMismatch {
                segments: segments.len(),
                values: values.len(),
            });
        }
        Ok(Self { segments, values })
    }

    /// Interleave segments and values in literal order.
    ///
    /// Values are stringified via their [`Display`](std::fmt::Display) form
    /// and inserted raw. Callers interpolating untrusted text should use
    /// [`render_safe`](Self::render_safe) or [`safe_html`] instead.
    pub fn render(&self) -> String {
        debug!(segments = self.segments.len(), "rendering raw template");
        self.render_with(|value| value.to_string())
    }

    /// Interleave segments and values with every value escaped.
    ///
    /// Only expression slots are escaped; literal segments pass through
    /// untouched.
    pub fn render_safe(&self) -> String {
        debug!(segments = self.segments.len(), "rendering escaped template");
        self.render_with(|value| escape_html(&value.to_string()).into_owned())
    }

    fn render_with(&self, mut expand: impl FnMut(&Value) -> String) -> String {
        let mut rendered = String::from(self.segments[0]);
        for (value, segment) in self.values.iter().zip(&self.segments[1..]) {
            rendered.push_str(&expand(value));
            rendered.push_str(segment);
        }
        rendered
    }
}

/// Raw template evaluation: interleave `segments` and `values` in order.
pub fn html(segments: &[&str], values: &[Value]) -> TemplateResult<String> {
    Ok(Template::new(segments, values)?.render())
}

/// Identical to [`html`]; named for callers assembling stylesheets.
pub fn css(segments: &[&str], values: &[Value]) -> TemplateResult<String> {
    html(segments, values)
}

/// Input accepted by [`safe_html`], resolved once at the API edge.
///
/// Either a full template invocation whose expression slots get escaped, or
/// a single plain value escaped directly.
#[derive(Debug)]
pub enum SafeInput<'a> {
    Template(Template<'a>),
    Plain(Value),
}

impl<'a> From<Template<'a>> for SafeInput<'a> {
    fn from(template: Template<'a>) -> Self {
        SafeInput::Template(template)
    }
}

impl From<Value> for SafeInput<'_> {
    fn from(value: Value) -> Self {
        SafeInput::Plain(value)
    }
}

impl From<&str> for SafeInput<'_> {
    fn from(s: &str) -> Self {
        SafeInput::Plain(Value::from(s))
    }
}

impl From<String> for SafeInput<'_> {
    fn from(s: String) -> Self {
        SafeInput::Plain(Value::from(s))
    }
}

impl From<i64> for SafeInput<'_> {
    fn from(i: i64) -> Self {
        SafeInput::Plain(Value::from(i))
    }
}

impl From<f64> for SafeInput<'_> {
    fn from(x: f64) -> Self {
        SafeInput::Plain(Value::from(x))
    }
}

/// Escape-then-interpolate entry point.
///
/// Given a [`Template`], escapes every expression value and interleaves;
/// given a plain value, escapes its rendered form directly. A plain
/// [`Value::Null`] renders as `""`.
pub fn safe_html<'a>(input: impl Into<SafeInput<'a>>) -> String {
    match input.into() {
        SafeInput::Template(template) => template.render_safe(),
        SafeInput::Plain(value) => escape_html(&value.to_string()).into_owned(),
    }
}
