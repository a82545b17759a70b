//! HTML escaping and comment stripping

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static HTML_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("static pattern compiles"));

const ESCAPABLE: &[char] = &['"', '&', '\'', '<', '>'];

/// Escape the five HTML-significant characters in `input`.
///
/// `"` `&` `'` `<` `>` become `&quot;` `&amp;` `&#39;` `&lt;` `&gt;`.
/// Returns the input borrowed, with no allocation, when nothing needs
/// escaping. The scan is single-pass: produced entities are never rescanned,
/// so text containing an entity is escaped again rather than preserved.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(ESCAPABLE) else {
        return Cow::Borrowed(input);
    };

    let mut escaped = String::with_capacity(input.len() + 8);
    escaped.push_str(&input[..first]);
    for ch in input[first..].chars() {
        match ch {
            '"' => escaped.push_str("&quot;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Remove every `<!-- ... -->` span from `input`, including comments that
/// span multiple lines. Unterminated comment openers are left untouched.
pub fn remove_html_comments(input: &str) -> String {
    HTML_COMMENT.replace_all(input, "").into_owned()
}
