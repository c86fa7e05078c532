//! Whole-form rendering.

use formprops_model::{FormPayload, RenderOptions, ValidationErrors};
use formprops_render::FormRenderer;

const PAYLOAD: &str = r#"{
    "form": {"id": "new_post", "action": "/posts", "method": "post", "acceptCharset": "UTF-8"},
    "extras": {
        "utf8": {"name": "utf8", "value": "✓"},
        "authenticity_token": {"name": "authenticity_token", "value": "abc"}
    },
    "fields": [
        {"input": {"type": "text", "name": "post[title]", "id": "post_title"}, "label": "Title", "errorKey": "title"},
        {"input": {"type": "submit", "text": "Save"}}
    ],
    "validationErrors": {"title": ["is too short", "is required"]}
}"#;

fn payload() -> FormPayload {
    FormPayload::from_json(PAYLOAD).expect("payload")
}

#[test]
fn form_writes_extras_in_payload_order_then_fields() {
    let html = FormRenderer::default()
        .render_form(&payload())
        .expect("render");
    insta::assert_snapshot!(html, @r#"<form id="new_post" action="/posts" method="post" accept-charset="UTF-8"><input type="hidden" name="utf8" value="✓" autocomplete="off"/><input type="hidden" name="authenticity_token" value="abc" autocomplete="off"/><label for="post_title">Title</label><input type="text" name="post[title]" id="post_title"/><span>is too short is required</span><button type="submit">Save</button></form>"#);
}

#[test]
fn explicit_error_store_replaces_payload_errors() {
    let html = FormRenderer::default()
        .render_form_with_errors(&payload(), &ValidationErrors::new())
        .expect("render");
    assert!(!html.contains("<span>"));
}

#[test]
fn pretty_output_puts_each_element_on_its_own_line() {
    let html = FormRenderer::new(RenderOptions::new().with_pretty(true))
        .render_form(&payload())
        .expect("render");
    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("<form "));
    assert!(lines[1].contains("utf8"));
    assert!(lines[2].contains("authenticity_token"));
    assert!(lines[3].starts_with("<label"));
    assert_eq!(lines[5], "</form>");
}

#[test]
fn empty_payload_renders_bare_form() {
    let html = FormRenderer::default()
        .render_form(&FormPayload::from_json("{}").expect("payload"))
        .expect("render");
    assert_eq!(html, "<form></form>");
}

#[test]
fn passes_do_not_share_error_state() {
    let renderer = FormRenderer::default();
    let form = payload();
    let first = renderer.render_form(&form).expect("first");
    let other: ValidationErrors = [("title", "taken")].into_iter().collect();
    let second = renderer
        .render_form_with_errors(&form, &other)
        .expect("second");
    assert!(first.contains("<span>is too short is required</span>"));
    assert!(second.contains("<span>taken</span>"));
    assert!(!second.contains("is too short"));
}
