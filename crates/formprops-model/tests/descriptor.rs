//! Tests for descriptor construction and the validation store.

use formprops_model::{
    DescriptorError, FieldDescriptor, FieldKind, FormPayload, SelectEntry, SelectValue,
    ValidationError, ValidationErrors,
};

fn select_payload(multiple: bool, default_value: &str) -> String {
    format!(
        r#"{{
            "type": "select",
            "name": "post[category]",
            "id": "post_category",
            "multiple": {multiple},
            "includeHidden": true,
            "defaultValue": {default_value},
            "options": [
                {{"value": "abe", "label": "abe"}},
                {{"label": "sports", "options": [
                    {{"value": "soccer", "label": "Soccer"}},
                    {{"value": "baseball", "label": "Baseball", "disabled": true}}
                ]}},
                {{"value": "hest", "label": "hest"}}
            ]
        }}"#
    )
}

#[test]
fn every_scalar_kind_parses_with_its_tag() {
    for (tag, kind) in [
        ("text", FieldKind::Text),
        ("email", FieldKind::Email),
        ("search", FieldKind::Search),
        ("password", FieldKind::Password),
        ("tel", FieldKind::Tel),
        ("url", FieldKind::Url),
        ("color", FieldKind::Color),
        ("date", FieldKind::Date),
        ("datetime-local", FieldKind::DatetimeLocal),
        ("month", FieldKind::Month),
        ("time", FieldKind::Time),
        ("number", FieldKind::Number),
        ("range", FieldKind::Range),
        ("file", FieldKind::File),
        ("hidden", FieldKind::Hidden),
        ("textarea", FieldKind::Textarea),
    ] {
        let payload = format!(r#"{{"type":"{tag}","name":"post[field]","id":"post_field"}}"#);
        let descriptor = FieldDescriptor::from_json(&payload).expect(tag);
        assert_eq!(descriptor.kind(), kind);
        assert_eq!(descriptor.name(), Some("post[field]"));
        assert_eq!(descriptor.id(), Some("post_field"));
    }
}

#[test]
fn numeric_bounds_are_kept() {
    let descriptor = FieldDescriptor::from_json(
        r#"{"type":"number","name":"post[age]","min":1,"max":100,"step":0.5,"defaultValue":10}"#,
    )
    .expect("parse number");
    let FieldDescriptor::Number(field) = descriptor else {
        panic!("expected number");
    };
    assert_eq!(field.min, Some(1.0));
    assert_eq!(field.max, Some(100.0));
    assert_eq!(field.step, Some(0.5));
    assert_eq!(field.default_value.as_deref(), Some("10"));
}

#[test]
fn unknown_type_is_rejected() {
    let err = FieldDescriptor::from_json(r#"{"type":"week","name":"post[week]"}"#)
        .expect_err("week is not a known kind");
    assert!(matches!(err, DescriptorError::Json(_)));
}

#[test]
fn unchecked_value_only_exists_on_checkboxes() {
    let descriptor = FieldDescriptor::from_json(
        r#"{"type":"radio","name":"post[kind]","value":"a","uncheckedValue":"0","includeHidden":true}"#,
    )
    .expect("extra keys are kept");
    let FieldDescriptor::Radio(radio) = descriptor else {
        panic!("expected radio");
    };
    assert_eq!(radio.value, "a");
    assert_eq!(radio.base.attributes["uncheckedValue"], "0");
    assert_eq!(radio.base.attributes["includeHidden"], true);
}

#[test]
fn unknown_keys_are_kept_in_payload_order() {
    let descriptor = FieldDescriptor::from_json(
        r#"{"type":"text","name":"user[name]","id":"user_name","pattern":"[a-z]+","autofocus":true,"data-role":"x","readOnly":true}"#,
    )
    .expect("parse text");
    let FieldDescriptor::Text(field) = descriptor else {
        panic!("expected text");
    };
    let keys: Vec<&str> = field.base.attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, ["pattern", "autofocus", "data-role", "readOnly"]);
    assert_eq!(field.base.name, "user[name]");
    assert_eq!(field.base.id.as_deref(), Some("user_name"));
}

#[test]
fn collection_items_keep_their_own_attributes() {
    let descriptor = FieldDescriptor::from_json(
        r#"{
            "type": "collection-radio-buttons",
            "collection": [
                {"type":"radio","value":1,"label":"one","name":"post[subscribe]","data-kind":"a"}
            ]
        }"#,
    )
    .expect("parse collection");
    let FieldDescriptor::CollectionRadioButtons(field) = descriptor else {
        panic!("expected collection");
    };
    let item = &field.collection[0];
    assert_eq!(item.label, "one");
    assert_eq!(item.field.base.attributes["data-kind"], "a");
    assert!(!item.field.base.attributes.contains_key("label"));
}

#[test]
fn multi_select_list_values_accept_numbers() {
    let descriptor = FieldDescriptor::from_json(
        r#"{"type":"select","name":"post[tag_ids][]","multiple":true,"defaultValue":[1,2],
            "options":[{"value":1,"label":"one"},{"value":2,"label":"two"},{"value":3,"label":"three"}]}"#,
    )
    .expect("parse select");
    let FieldDescriptor::Select(select) = descriptor else {
        panic!("expected select");
    };
    assert_eq!(select.current_values(), ["1", "2"]);
    let selected: Vec<&str> = select
        .flat_options()
        .filter(|option| select.is_selected(option))
        .map(|option| option.value.as_str())
        .collect();
    assert_eq!(selected, ["1", "2"]);
}

#[test]
fn collection_item_values_accept_numbers() {
    let descriptor = FieldDescriptor::from_json(
        r#"{
            "type": "collection-check-boxes",
            "includeHidden": true,
            "collection": [
                {"type":"checkbox","value":1,"label":"one","name":"post[author_ids][]","id":"post_author_ids_1","defaultChecked":true},
                {"type":"checkbox","value":2,"label":"two","name":"post[author_ids][]","id":"post_author_ids_2"}
            ]
        }"#,
    )
    .expect("parse collection");
    let FieldDescriptor::CollectionCheckBoxes(field) = descriptor else {
        panic!("expected collection");
    };
    assert_eq!(field.name(), Some("post[author_ids][]"));
    let values: Vec<&str> = field
        .collection
        .iter()
        .map(|item| item.field.value.as_str())
        .collect();
    assert_eq!(values, ["1", "2"]);
    assert_eq!(field.collection[0].label, "one");
    assert!(field.collection[0].field.is_checked());
}

#[test]
fn collection_items_must_share_a_name() {
    let err = FieldDescriptor::from_json(
        r#"{
            "type": "collection-radio-buttons",
            "collection": [
                {"value":"1","label":"one","name":"post[subscribe]"},
                {"value":"2","label":"two","name":"post[unsubscribe]"}
            ]
        }"#,
    )
    .expect_err("mismatched names");
    match err {
        DescriptorError::CollectionNameMismatch {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 1);
            assert_eq!(expected, "post[subscribe]");
            assert_eq!(found, "post[unsubscribe]");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn grouped_options_keep_order() {
    let descriptor =
        FieldDescriptor::from_json(&select_payload(true, r#"["soccer"]"#)).expect("parse select");
    let FieldDescriptor::Select(select) = descriptor else {
        panic!("expected select");
    };
    assert!(matches!(select.options[0], SelectEntry::Item(_)));
    let SelectEntry::Group(group) = &select.options[1] else {
        panic!("expected group");
    };
    assert_eq!(group.label, "sports");
    assert!(group.options[1].disabled);
    let flat: Vec<&str> = select.flat_options().map(|o| o.value.as_str()).collect();
    assert_eq!(flat, ["abe", "soccer", "baseball", "hest"]);
}

#[test]
fn malformed_option_is_rejected_at_construction() {
    let err = FieldDescriptor::from_json(
        r#"{"type":"select","name":"post[category]","options":[{"text":"abe"}]}"#,
    )
    .expect_err("option without value or options");
    assert!(matches!(err, DescriptorError::Json(_)));
}

#[test]
fn nested_groups_are_rejected() {
    let err = FieldDescriptor::from_json(
        r#"{"type":"select","name":"post[category]","options":[
            {"label":"outer","options":[{"label":"inner","options":[]}]}
        ]}"#,
    )
    .expect_err("groups nest one level only");
    assert!(matches!(err, DescriptorError::Json(_)));
}

#[test]
fn multi_select_scalar_default_is_normalized() {
    let descriptor =
        FieldDescriptor::from_json(&select_payload(true, r#""hest""#)).expect("parse select");
    let FieldDescriptor::Select(select) = descriptor else {
        panic!("expected select");
    };
    assert_eq!(
        select.default_value,
        Some(SelectValue::Many(vec!["hest".to_string()]))
    );
    assert_eq!(select.current_values(), ["hest".to_string()]);
}

#[test]
fn single_select_list_value_is_rejected() {
    let err = FieldDescriptor::from_json(&select_payload(false, r#"["abe","hest"]"#))
        .expect_err("single select with list");
    assert!(matches!(
        err,
        DescriptorError::ScalarSelectGivenList { count: 2, .. }
    ));
}

#[test]
fn value_takes_precedence_over_default() {
    let descriptor = FieldDescriptor::from_json(
        r#"{"type":"select","name":"s","value":"b","defaultValue":"a","options":[
            {"value":"a","label":"A"},{"value":"b","label":"B"}
        ]}"#,
    )
    .expect("parse select");
    let FieldDescriptor::Select(select) = descriptor else {
        panic!("expected select");
    };
    assert_eq!(select.current_values(), ["b".to_string()]);
}

#[test]
fn validation_errors_accept_strings_and_lists() {
    let errors = ValidationErrors::from_json(r#"{"title":"bad","body":["bad","worse"]}"#)
        .expect("parse errors");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("title").map(ValidationError::joined).as_deref(), Some("bad"));
    assert_eq!(
        errors.get("body").map(ValidationError::joined).as_deref(),
        Some("bad worse")
    );
    assert!(errors.get("missing").is_none());
}

#[test]
fn validation_error_normalization_is_stable() {
    let single = ValidationError::from("bad");
    assert_eq!(single.messages(), ["bad".to_string()]);
    assert_eq!(single.messages(), single.messages());
    let many = ValidationError::from(vec!["bad", "worse"]);
    assert_eq!(many.joined(), "bad worse");
    assert_eq!(many.messages().len(), 2);
}

#[test]
fn form_payload_validates_every_field() {
    let payload = r#"{
        "form": {"action": "/posts", "method": "post", "acceptCharset": "UTF-8"},
        "extras": {
            "utf8": {"name": "utf8", "type": "hidden", "value": "✓", "autoComplete": "off"},
            "csrf": {"name": "authenticity_token", "type": "hidden", "value": "token"}
        },
        "fields": [
            {"input": {"type": "text", "name": "post[title]", "id": "post_title"}, "label": "Title", "errorKey": "title"},
            {"input": {"type": "select", "name": "post[tag_ids][]", "multiple": true, "includeHidden": true,
                       "defaultValue": "1", "options": [{"value": 1, "label": "one"}]}}
        ],
        "validationErrors": {"title": "can't be blank"}
    }"#;
    let form = FormPayload::from_json(payload).expect("parse form");
    assert_eq!(form.form.action.as_deref(), Some("/posts"));
    let extra_keys: Vec<&str> = form.extras.keys().map(String::as_str).collect();
    assert_eq!(extra_keys, ["utf8", "csrf"]);
    assert_eq!(form.extras["utf8"].attributes["type"], "hidden");
    assert_eq!(form.fields.len(), 2);
    assert_eq!(form.fields[0].error_key.as_deref(), Some("title"));
    let FieldDescriptor::Select(select) = &form.fields[1].input else {
        panic!("expected select");
    };
    assert_eq!(
        select.default_value,
        Some(SelectValue::Many(vec!["1".to_string()]))
    );
    assert!(form.validation_errors.contains_key("title"));
}
