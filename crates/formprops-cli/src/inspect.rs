//! Submission-contract report for a form payload.
//!
//! Lists, per field, the hidden inputs the renderer will add and the error
//! text bound to it, without rendering any markup.

use std::collections::BTreeSet;

use formprops_model::{DecoderPrecedence, FieldKind, FormPayload, ValidationErrors};
use formprops_render::{CompanionGenerator, ErrorBinder};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenReport {
    pub name: String,
    pub value: Option<String>,
    /// `before` / `after` the control, or `form` for helper extras.
    pub placement: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub index: usize,
    pub kind: FieldKind,
    pub name: Option<String>,
    pub label: Option<String>,
    pub error_key: Option<String>,
    pub error: Option<String>,
    pub hidden: Vec<HiddenReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub extras: Vec<HiddenReport>,
    pub fields: Vec<FieldReport>,
    /// Store keys no field refers to, sorted.
    pub unused_error_keys: Vec<String>,
}

impl InspectReport {
    /// Hidden inputs across extras and fields.
    pub fn hidden_count(&self) -> usize {
        self.extras.len() + self.fields.iter().map(|f| f.hidden.len()).sum::<usize>()
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.error.is_some()).count()
    }
}

pub fn inspect(
    payload: &FormPayload,
    errors: &ValidationErrors,
    precedence: DecoderPrecedence,
) -> InspectReport {
    let companions = CompanionGenerator::new(precedence);
    let binder = ErrorBinder::new(errors);

    let extras = payload
        .extras
        .values()
        .map(|extra| HiddenReport {
            name: extra.name.clone(),
            value: extra.value.clone().or_else(|| extra.default_value.clone()),
            placement: "form",
        })
        .collect();

    let fields = payload
        .fields
        .iter()
        .enumerate()
        .map(|(index, entry)| FieldReport {
            index,
            kind: entry.input.kind(),
            name: entry.input.name().map(str::to_string),
            label: entry.label.clone(),
            error_key: entry.error_key.clone(),
            error: binder
                .resolve(entry.error_key.as_deref())
                .map(|message| message.to_string()),
            hidden: companions
                .for_descriptor(&entry.input)
                .into_iter()
                .map(|companion| HiddenReport {
                    name: companion.input.name,
                    value: companion.input.value,
                    placement: companion.placement.as_str(),
                })
                .collect(),
        })
        .collect();

    let referenced: BTreeSet<&str> = payload
        .fields
        .iter()
        .filter_map(|entry| entry.error_key.as_deref())
        .collect();
    let mut unused_error_keys: Vec<String> = errors
        .keys()
        .filter(|key| !referenced.contains(key))
        .map(str::to_string)
        .collect();
    unused_error_keys.sort();

    InspectReport {
        extras,
        fields,
        unused_error_keys,
    }
}
