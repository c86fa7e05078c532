//! Whole-form payloads: form attributes, helper extras and field entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{FieldDescriptor, HiddenField};
use crate::validation::ValidationErrors;

/// Attributes of the `<form>` element itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAttributes {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub action: Option<String>,
    pub method: Option<String>,
    pub accept_charset: Option<String>,
    pub enc_type: Option<String>,
}

/// One field in a form: the descriptor plus the caller's label and error key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub input: FieldDescriptor,
    pub label: Option<String>,
    /// Lookup key into [`ValidationErrors`], independent of the field name.
    pub error_key: Option<String>,
}

impl FieldEntry {
    pub fn new(input: FieldDescriptor) -> Self {
        Self {
            input,
            label: None,
            error_key: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_error_key(mut self, error_key: impl Into<String>) -> Self {
        self.error_key = Some(error_key.into());
        self
    }
}

/// A complete form as produced by the server-side helper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPayload {
    #[serde(default)]
    pub form: FormAttributes,
    /// Helper-generated hidden inputs (`utf8`, `authenticity_token`, `_method`),
    /// in payload order.
    #[serde(default)]
    pub extras: IndexMap<String, HiddenField>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
    #[serde(default)]
    pub validation_errors: ValidationErrors,
}

impl FormPayload {
    /// Parse a payload and run every field through the construction boundary.
    pub fn from_json(payload: &str) -> Result<Self> {
        let mut form: FormPayload = serde_json::from_str(payload)?;
        form.fields = form
            .fields
            .into_iter()
            .map(|entry| {
                Ok(FieldEntry {
                    input: entry.input.validated()?,
                    ..entry
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(form)
    }
}
