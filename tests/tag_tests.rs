//! Tests for the tag builder and its fixed specializations

use weft::{div, p, span, tag, AttrSpec};

// ==================== class shorthand ====================

#[test]
fn test_class_shorthand() {
    assert_eq!(tag("div", "card", "hi"), r#"<div class="card">hi</div>"#);
}

#[test]
fn test_class_shorthand_empty_class() {
    assert_eq!(tag("div", "", "hi"), r#"<div class="">hi</div>"#);
}

// ==================== attribute maps ====================

#[test]
fn test_attribute_map_with_list_content() {
    assert_eq!(
        tag("ul", [("id", "x")], vec!["<li>a</li>", "<li>b</li>"]),
        r#"<ul id="x"><li>a</li> <li>b</li></ul>"#
    );
}

#[test]
fn test_attribute_map_preserves_order() {
    assert_eq!(
        tag("nav", [("id", "menu"), ("data-role", "nav")], "x"),
        r#"<nav id="menu" data-role="nav">x</nav>"#
    );
}

#[test]
fn test_attribute_values_are_not_escaped() {
    // Attribute values are interpolated raw; callers pre-escape untrusted
    // values themselves.
    assert_eq!(
        tag("a", [("title", "a<b")], "link"),
        r#"<a title="a<b">link</a>"#
    );
}

#[test]
fn test_empty_attribute_map_renders_no_attribute_text() {
    assert_eq!(tag("div", AttrSpec::Map(vec![]), "x"), "<div>x</div>");
}

// ==================== absent attributes ====================

#[test]
fn test_no_attributes_no_space() {
    assert_eq!(tag("span", (), "x"), "<span>x</span>");
    assert_eq!(tag("br", AttrSpec::None, ""), "<br></br>");
}

// ==================== content shapes ====================

#[test]
fn test_list_content_joined_with_single_spaces() {
    let parts = vec!["one".to_string(), "two".to_string(), "three".to_string()];
    assert_eq!(tag("p", (), parts), "<p>one two three</p>");
}

#[test]
fn test_empty_content() {
    assert_eq!(tag("div", "empty", ""), r#"<div class="empty"></div>"#);
}

// ==================== specializations ====================

#[test]
fn test_div_span_p_wrappers() {
    assert_eq!(div("card", "hi"), tag("div", "card", "hi"));
    assert_eq!(span((), "hi"), "<span>hi</span>");
    assert_eq!(p("lead", "hi"), r#"<p class="lead">hi</p>"#);
}

#[test]
fn test_nested_tags_compose() {
    let inner = span("badge", "3");
    assert_eq!(
        div("counter", inner),
        r#"<div class="counter"><span class="badge">3</span></div>"#
    );
}
