//! String-first HTML templating helpers
//!
//! This crate produces HTML/CSS strings from literal templates with embedded
//! expression values, escapes untrusted text for safe interpolation, and
//! offers small composable helpers for iteration, conditional inclusion, and
//! tag construction. There is no parser, no DOM, and no compile step; helpers
//! compose by ordinary function call and return plain strings.
//!
//! # Rendering
//!
//! - [`html`] / [`css`] - raw interleaving of literal segments and values
//! - [`safe_html`] - same, with every expression value HTML-escaped
//! - [`escape_html`] - escape a single string
//!
//! # Helpers
//!
//! - [`each`] - walk a list, map, or integer range, concatenating results
//! - [`render_if`] - render only when a condition is present, soft-failing
//!   to `""` on empty values or failed lazy conditions
//! - [`tag`], [`div`], [`span`], [`p`] - build a single element string
//! - [`remove_html_comments`] - strip `<!-- ... -->` spans
//!
//! # Example
//!
//! ```
//! use weft::{safe_html, tag, Template, Value};
//!
//! let values = [Value::from("<World>")];
//! let template = Template::new(&["Hello, ", "!"], &values).unwrap();
//! assert_eq!(safe_html(template), "Hello, &lt;World&gt;!");
//!
//! assert_eq!(tag("div", "card", "hi"), r#"<div class="card">hi</div>"#);
//! ```
//!
//! # Soft-fail policy
//!
//! Helpers never propagate failures from caller-supplied closures: a lazy
//! condition that fails, or a collection of unrecognized shape, renders as
//! the empty string. The only surfaced error is a malformed template
//! invocation, rejected when the [`Template`] is built.

mod error;
mod escape;
mod helpers;
mod tags;
mod template;
mod value;

pub use error::{TemplateError, TemplateResult};
pub use escape::{escape_html, remove_html_comments};
pub use helpers::{each, render_if, Condition, Key};
pub use tags::{div, p, span, tag, AttrSpec, Content};
pub use template::{css, html, safe_html, SafeInput, Template};
pub use value::{Emptiness, Value};
