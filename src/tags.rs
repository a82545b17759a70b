//! HTML tag construction helpers

/// Attribute specification for [`tag`].
///
/// A bare string is shorthand for `class="..."`; a map renders each entry
/// as `name="value"` in insertion order. Attribute values are interpolated
/// raw; callers escape untrusted values themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttrSpec {
    #[default]
    None,
    Class(String),
    Map(Vec<(String, String)>),
}

impl From<()> for AttrSpec {
    fn from(_: ()) -> Self {
        AttrSpec::None
    }
}

impl From<&str> for AttrSpec {
    fn from(class: &str) -> Self {
        AttrSpec::Class(class.to_string())
    }
}

impl From<String> for AttrSpec {
    fn from(class: String) -> Self {
        AttrSpec::Class(class)
    }
}

impl From<Vec<(String, String)>> for AttrSpec {
    fn from(entries: Vec<(String, String)>) -> Self {
        AttrSpec::Map(entries)
    }
}

impl From<Vec<(&str, &str)>> for AttrSpec {
    fn from(entries: Vec<(&str, &str)>) -> Self {
        AttrSpec::Map(
            entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for AttrSpec {
    fn from(entries: [(&str, &str); N]) -> Self {
        AttrSpec::Map(
            entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Element content for [`tag`]: a single text chunk, or a list of chunks
/// joined with single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<String>> for Content {
    fn from(parts: Vec<String>) -> Self {
        Content::List(parts)
    }
}

impl From<Vec<&str>> for Content {
    fn from(parts: Vec<&str>) -> Self {
        Content::List(parts.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Content {
    fn from(parts: [&str; N]) -> Self {
        Content::List(parts.into_iter().map(str::to_string).collect())
    }
}

fn attribute_text(attrs: &AttrSpec) -> String {
    match attrs {
        AttrSpec::None => String::new(),
        AttrSpec::Class(class) => format!(" class=\"{class}\""),
        AttrSpec::Map(entries) => {
            if entries.is_empty() {
                return String::new();
            }
            let rendered: Vec<String> = entries
                .iter()
                .map(|(name, value)| format!("{name}=\"{value}\""))
                .collect();
            format!(" {}", rendered.join(" "))
        }
    }
}

/// Render a single HTML element as `<name attrs>content</name>`.
///
/// Exactly one space precedes the attribute text when attributes are
/// present, none when absent.
pub fn tag(name: &str, attrs: impl Into<AttrSpec>, content: impl Into<Content>) -> String {
    let attrs = attrs.into();
    let content = match content.into() {
        Content::Text(text) => text,
        Content::List(parts) => parts.join(" "),
    };
    format!("<{name}{}>{content}</{name}>", attribute_text(&attrs))
}

/// Render a `<div>` element.
pub fn div(attrs: impl Into<AttrSpec>, content: impl Into<Content>) -> String {
    tag("div", attrs, content)
}

/// Render a `<span>` element.
pub fn span(attrs: impl Into<AttrSpec>, content: impl Into<Content>) -> String {
    tag("span", attrs, content)
}

/// Render a `<p>` element.
pub fn p(attrs: impl Into<AttrSpec>, content: impl Into<Content>) -> String {
    tag("p", attrs, content)
}
