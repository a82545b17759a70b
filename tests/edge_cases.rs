//! Edge cases and whole-page composition tests

use serde::Serialize;
use serde_json::json;
use weft::{each, html, remove_html_comments, render_if, safe_html, tag, Value};

// ==================== nested composition ====================

#[test]
fn test_helpers_compose_inside_templates() {
    let items = Value::from(json!(["alpha", "beta"]));
    let list = tag(
        "ul",
        (),
        each(&items, |item, _| Some(tag("li", (), item.to_string()))),
    );

    let values = [Value::from(list)];
    let page = html(&["<main>", "</main>"], &values).unwrap();
    assert_eq!(
        page,
        "<main><ul><li>alpha</li><li>beta</li></ul></main>"
    );
}

#[test]
fn test_conditional_section_inside_page() {
    let user = Value::from(json!({"name": "Ada"}));
    let greeting = render_if(user, |value| {
        each(value, |field, _| Some(safe_html(field.clone())))
    });
    assert_eq!(greeting, "Ada");

    let nobody = render_if(Value::Null, |_| "never".to_string());
    assert_eq!(nobody, "");
}

// ==================== double-escaping ====================

#[test]
fn test_already_escaped_text_is_escaped_again() {
    // Escaping carries no "pre-escaped" marker: nesting safe_html calls
    // escapes entity ampersands again. Compose raw output with `html` when
    // the inner string is already safe.
    assert_eq!(safe_html("&amp;"), "&amp;amp;");

    let inner = safe_html("<b>");
    let values = [Value::from(inner)];
    let outer = html(&["", ""], &values).unwrap();
    assert_eq!(outer, "&lt;b&gt;");
}

// ==================== serialized contexts ====================

#[derive(Serialize)]
struct User {
    name: String,
    admin: bool,
}

#[test]
fn test_from_serialize_context() {
    let user = User {
        name: "Grace".to_string(),
        admin: true,
    };
    let context = Value::from_serialize(&user).unwrap();

    let rendered = each(&context, |field, key| Some(format!("{key}={field};")));
    assert_eq!(rendered, "name=Grace;admin=true;");
}

#[test]
fn test_json_round_trip_preserves_entry_order() {
    let original = json!({"z": 1, "a": 2, "m": 3});
    let value = Value::from(original.clone());
    assert_eq!(serde_json::Value::from(value), original);
}

// ==================== whole-page rendering ====================

#[test]
fn test_commented_draft_renders_clean() {
    let names = Value::from(json!(["<Tom>", "Jerry"]));
    let rows = each(&names, |name, index| {
        let position = index.to_string();
        Some(tag(
            "li",
            [("data-index", position.as_str())],
            safe_html(name.clone()),
        ))
    });

    let values = [Value::from(rows)];
    let draft = html(
        &["<!-- draft list -->\n<ol>", "</ol><!--\nreviewer notes\n-->"],
        &values,
    )
    .unwrap();

    assert_eq!(
        remove_html_comments(&draft),
        r#"
<ol><li data-index="0">&lt;Tom&gt;</li><li data-index="1">Jerry</li></ol>"#
    );
}
