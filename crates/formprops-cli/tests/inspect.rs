//! Integration tests for the inspect report.

use formprops_cli::inspect::{HiddenReport, inspect};
use formprops_model::{DecoderPrecedence, FieldKind, FormPayload, ValidationErrors};

const PAYLOAD: &str = r#"{
    "extras": {"utf8": {"name": "utf8", "value": "✓"}},
    "fields": [
        {"input": {"type": "checkbox", "name": "post[admin]", "value": "1", "uncheckedValue": "0", "includeHidden": true},
         "label": "Admin", "errorKey": "admin"},
        {"input": {"type": "select", "name": "post[tag_ids][]", "multiple": true, "includeHidden": true,
                   "options": [{"value": 1, "label": "one"}]}},
        {"input": {"type": "collection-radio-buttons", "includeHidden": true, "collection": []}},
        {"input": {"type": "text", "name": "post[title]"}, "errorKey": "title"}
    ],
    "validationErrors": {"title": ["is short", "is plain"], "body": "is missing"}
}"#;

fn payload() -> FormPayload {
    FormPayload::from_json(PAYLOAD).expect("payload")
}

#[test]
fn reports_companions_per_field() {
    let form = payload();
    let report = inspect(&form, &form.validation_errors, DecoderPrecedence::LastWins);
    assert_eq!(report.fields.len(), 4);
    assert_eq!(
        report.fields[0].hidden,
        vec![HiddenReport {
            name: "post[admin]".to_string(),
            value: Some("0".to_string()),
            placement: "before",
        }]
    );
    assert_eq!(report.fields[1].hidden[0].value.as_deref(), Some(""));
    assert!(report.fields[2].hidden.is_empty());
    assert_eq!(report.fields[2].kind, FieldKind::CollectionRadioButtons);
    assert_eq!(report.fields[2].name, None);
    assert!(report.fields[3].hidden.is_empty());
    assert_eq!(report.hidden_count(), 3);
}

#[test]
fn first_wins_is_reported_after() {
    let form = payload();
    let report = inspect(&form, &form.validation_errors, DecoderPrecedence::FirstWins);
    assert_eq!(report.fields[0].hidden[0].placement, "after");
    assert_eq!(report.fields[1].hidden[0].placement, "before");
}

#[test]
fn binds_errors_and_lists_unused_keys() {
    let form = payload();
    let report = inspect(&form, &form.validation_errors, DecoderPrecedence::LastWins);
    assert_eq!(report.fields[0].error, None);
    assert_eq!(report.fields[3].error.as_deref(), Some("is short is plain"));
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.unused_error_keys, vec!["body".to_string()]);
}

#[test]
fn explicit_error_store_is_used() {
    let form = payload();
    let errors: ValidationErrors = [("admin", "must be accepted")].into_iter().collect();
    let report = inspect(&form, &errors, DecoderPrecedence::LastWins);
    assert_eq!(report.fields[0].error.as_deref(), Some("must be accepted"));
    assert!(report.unused_error_keys.is_empty());
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let form = payload();
    let report = inspect(&form, &ValidationErrors::new(), DecoderPrecedence::LastWins);
    let value = serde_json::to_value(&report).expect("json");
    insta::assert_json_snapshot!(value["fields"][0], @r#"
    {
      "error": null,
      "errorKey": "admin",
      "hidden": [
        {
          "name": "post[admin]",
          "placement": "before",
          "value": "0"
        }
      ],
      "index": 0,
      "kind": "checkbox",
      "label": "Admin",
      "name": "post[admin]"
    }
    "#);
    assert_eq!(value["extras"][0]["placement"], "form");
}
