//! Field descriptors: one variant per control kind.
//!
//! Descriptors arrive as JSON objects tagged by `type`, with camelCase keys
//! (`defaultValue`, `uncheckedValue`, `includeHidden`). Each variant types
//! the attributes the renderer acts on; any other key (`pattern`,
//! `readOnly`, `data-*`, `aria-*`) is kept in [`HtmlAttributes`] in payload
//! order and written onto the control as-is.
//!
//! Descriptors built through [`FieldDescriptor::from_json`] or
//! [`FieldDescriptor::validated`] have passed the construction boundary:
//! select values are shaped to match `multiple` and collection items share a
//! single submission name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::de::{optional_scalar_string, scalar_string, scalar_strings};
use crate::error::{DescriptorError, Result};

/// Control kind. Mirrors the `type` tag of a [`FieldDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Email,
    Search,
    Password,
    Tel,
    Url,
    Color,
    Date,
    DatetimeLocal,
    Month,
    Time,
    Number,
    Range,
    File,
    Hidden,
    Textarea,
    Checkbox,
    Radio,
    Select,
    CollectionCheckBoxes,
    CollectionRadioButtons,
    Submit,
}

impl FieldKind {
    /// Returns the payload tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Search => "search",
            FieldKind::Password => "password",
            FieldKind::Tel => "tel",
            FieldKind::Url => "url",
            FieldKind::Color => "color",
            FieldKind::Date => "date",
            FieldKind::DatetimeLocal => "datetime-local",
            FieldKind::Month => "month",
            FieldKind::Time => "time",
            FieldKind::Number => "number",
            FieldKind::Range => "range",
            FieldKind::File => "file",
            FieldKind::Hidden => "hidden",
            FieldKind::Textarea => "textarea",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Select => "select",
            FieldKind::CollectionCheckBoxes => "collection-check-boxes",
            FieldKind::CollectionRadioButtons => "collection-radio-buttons",
            FieldKind::Submit => "submit",
        }
    }


    /// True for kinds rendered as a single checkable input.
    pub fn is_checkable(&self) -> bool {
        matches!(
            self,
            FieldKind::Checkbox
                | FieldKind::Radio
                | FieldKind::CollectionCheckBoxes
                | FieldKind::CollectionRadioButtons
        )
    }

}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.trim().to_string()))
            .map_err(|_| format!("Unknown field kind: {}", s))
    }
}

/// Pass-through attributes keyed as they appear in the payload.
pub type HtmlAttributes = IndexMap<String, serde_json::Value>;

/// Attributes shared by every named control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBase {
    /// Submission key, verbatim (may carry `parent[child][]` suffixes).
    pub name: String,
    pub id: Option<String>,
    pub class_name: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(flatten)]
    pub attributes: HtmlAttributes,
}

impl InputBase {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// Text-like controls: text, email, search, password, tel, url, color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    #[serde(flatten)]
    pub base: InputBase,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub size: Option<u32>,
    pub max_length: Option<u32>,
}

/// Date and time controls. Bounds are ISO strings passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalField {
    #[serde(flatten)]
    pub base: InputBase,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub default_value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<f64>,
}

/// Number and range controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericField {
    #[serde(flatten)]
    pub base: InputBase,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

/// File upload control. Never carries a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileField {
    #[serde(flatten)]
    pub base: InputBase,
    pub accept: Option<String>,
    #[serde(default)]
    pub multiple: bool,
}

/// Hidden input, also used for the helper's form extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenField {
    pub name: String,
    pub id: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub default_value: Option<String>,
    /// Extra keys such as `type` or `autoComplete`; the fixed attributes win.
    #[serde(flatten)]
    pub attributes: HtmlAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAreaField {
    #[serde(flatten)]
    pub base: InputBase,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub rows: Option<u32>,
    pub cols: Option<u32>,
}

/// A single checkbox.
///
/// When `include_hidden` is set the rendered output carries a hidden input
/// with the same name and `unchecked_value`, so an unchecked box still
/// submits its key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxField {
    #[serde(flatten)]
    pub base: InputBase,
    #[serde(deserialize_with = "scalar_string")]
    pub value: String,
    pub checked: Option<bool>,
    pub default_checked: Option<bool>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub unchecked_value: Option<String>,
    #[serde(default)]
    pub include_hidden: bool,
}

impl CheckboxField {
    pub fn is_checked(&self) -> bool {
        self.checked.or(self.default_checked).unwrap_or(false)
    }
}

/// A single radio button. Radios never carry their own hidden companion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioButtonField {
    #[serde(flatten)]
    pub base: InputBase,
    #[serde(deserialize_with = "scalar_string")]
    pub value: String,
    pub checked: Option<bool>,
    pub default_checked: Option<bool>,
}

impl RadioButtonField {
    pub fn is_checked(&self) -> bool {
        self.checked.or(self.default_checked).unwrap_or(false)
    }
}

/// A collection member: the item's own attributes plus its label text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Labeled<T> {
    #[serde(flatten)]
    pub field: T,
    pub label: String,
}

/// Checkbox group sharing one array-style name (`post[author_ids][]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCheckBoxesField {
    pub collection: Vec<Labeled<CheckboxField>>,
    #[serde(default)]
    pub include_hidden: bool,
}

impl CollectionCheckBoxesField {
    /// Shared submission name, taken from the first item.
    pub fn name(&self) -> Option<&str> {
        self.collection.first().map(|item| item.field.base.name.as_str())
    }
}

/// Radio group sharing one name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRadioButtonsField {
    pub collection: Vec<Labeled<RadioButtonField>>,
    #[serde(default)]
    pub include_hidden: bool,
}

impl CollectionRadioButtonsField {
    /// Shared submission name, taken from the first item.
    pub fn name(&self) -> Option<&str> {
        self.collection.first().map(|item| item.field.base.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(deserialize_with = "scalar_string")]
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

/// A labeled `<optgroup>`. Groups hold plain options only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOptionGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
}

/// One top-level entry of a select's `options`.
///
/// An object with `options` is a group; one with `value` and `label` is a
/// plain option. Anything else fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectEntry {
    Group(SelectOptionGroup),
    Item(SelectOption),
}

/// Current value(s) of a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    One(#[serde(deserialize_with = "scalar_string")] String),
    Many(#[serde(deserialize_with = "scalar_strings")] Vec<String>),
}

impl SelectValue {
    pub fn as_slice(&self) -> &[String] {
        match self {
            SelectValue::One(value) => std::slice::from_ref(value),
            SelectValue::Many(values) => values,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.as_slice().iter().any(|current| current == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectField {
    #[serde(flatten)]
    pub base: InputBase,
    pub value: Option<SelectValue>,
    pub default_value: Option<SelectValue>,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub include_hidden: bool,
    pub options: Vec<SelectEntry>,
}

impl SelectField {
    /// Values that mark options as selected: `value`, else `defaultValue`.
    pub fn current_values(&self) -> &[String] {
        self.value
            .as_ref()
            .or(self.default_value.as_ref())
            .map(SelectValue::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.current_values().iter().any(|value| *value == option.value)
    }

    /// Iterates every plain option in document order, descending into groups.
    pub fn flat_options(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter().flat_map(|entry| match entry {
            SelectEntry::Group(group) => group.options.iter(),
            SelectEntry::Item(option) => std::slice::from_ref(option).iter(),
        })
    }

    fn normalize_values(&mut self) -> Result<()> {
        for slot in [&mut self.value, &mut self.default_value] {
            match slot.take() {
                Some(SelectValue::One(value)) if self.multiple => {
                    *slot = Some(SelectValue::Many(vec![value]));
                }
                Some(SelectValue::Many(values)) if !self.multiple => {
                    return Err(DescriptorError::ScalarSelectGivenList {
                        name: self.base.name.clone(),
                        count: values.len(),
                    });
                }
                other => *slot = other,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButton {
    pub name: Option<String>,
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub text: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(flatten)]
    pub attributes: HtmlAttributes,
}

/// A form control described by the server-side helper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldDescriptor {
    Text(TextField),
    Email(TextField),
    Search(TextField),
    Password(TextField),
    Tel(TextField),
    Url(TextField),
    Color(TextField),
    Date(TemporalField),
    DatetimeLocal(TemporalField),
    Month(TemporalField),
    Time(TemporalField),
    Number(NumericField),
    Range(NumericField),
    File(FileField),
    Hidden(HiddenField),
    Textarea(TextAreaField),
    Checkbox(CheckboxField),
    Radio(RadioButtonField),
    Select(SelectField),
    CollectionCheckBoxes(CollectionCheckBoxesField),
    CollectionRadioButtons(CollectionRadioButtonsField),
    Submit(SubmitButton),
}

impl FieldDescriptor {
    /// Parse and validate a single descriptor.
    pub fn from_json(payload: &str) -> Result<Self> {
        let descriptor: FieldDescriptor = serde_json::from_str(payload)?;
        descriptor.validated()
    }

    /// Parse and validate a descriptor from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let descriptor: FieldDescriptor = serde_json::from_value(value)?;
        descriptor.validated()
    }

    /// Apply the construction-boundary checks to a descriptor built in code.
    ///
    /// A multi-select given a single current value gets a one-element list;
    /// a single select given a list is rejected, as is a collection whose
    /// items disagree on their name.
    pub fn validated(mut self) -> Result<Self> {
        match &mut self {
            FieldDescriptor::Select(select) => select.normalize_values()?,
            FieldDescriptor::CollectionCheckBoxes(field) => {
                check_shared_name(field.collection.iter().map(|item| &item.field.base))?;
            }
            FieldDescriptor::CollectionRadioButtons(field) => {
                check_shared_name(field.collection.iter().map(|item| &item.field.base))?;
            }
            _ => {}
        }
        Ok(self)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldDescriptor::Text(_) => FieldKind::Text,
            FieldDescriptor::Email(_) => FieldKind::Email,
            FieldDescriptor::Search(_) => FieldKind::Search,
            FieldDescriptor::Password(_) => FieldKind::Password,
            FieldDescriptor::Tel(_) => FieldKind::Tel,
            FieldDescriptor::Url(_) => FieldKind::Url,
            FieldDescriptor::Color(_) => FieldKind::Color,
            FieldDescriptor::Date(_) => FieldKind::Date,
            FieldDescriptor::DatetimeLocal(_) => FieldKind::DatetimeLocal,
            FieldDescriptor::Month(_) => FieldKind::Month,
            FieldDescriptor::Time(_) => FieldKind::Time,
            FieldDescriptor::Number(_) => FieldKind::Number,
            FieldDescriptor::Range(_) => FieldKind::Range,
            FieldDescriptor::File(_) => FieldKind::File,
            FieldDescriptor::Hidden(_) => FieldKind::Hidden,
            FieldDescriptor::Textarea(_) => FieldKind::Textarea,
            FieldDescriptor::Checkbox(_) => FieldKind::Checkbox,
            FieldDescriptor::Radio(_) => FieldKind::Radio,
            FieldDescriptor::Select(_) => FieldKind::Select,
            FieldDescriptor::CollectionCheckBoxes(_) => FieldKind::CollectionCheckBoxes,
            FieldDescriptor::CollectionRadioButtons(_) => FieldKind::CollectionRadioButtons,
            FieldDescriptor::Submit(_) => FieldKind::Submit,
        }
    }

    /// Submission name. Collections report their shared name; empty
    /// collections and unnamed submit buttons have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            FieldDescriptor::Text(f)
            | FieldDescriptor::Email(f)
            | FieldDescriptor::Search(f)
            | FieldDescriptor::Password(f)
            | FieldDescriptor::Tel(f)
            | FieldDescriptor::Url(f)
            | FieldDescriptor::Color(f) => Some(&f.base.name),
            FieldDescriptor::Date(f)
            | FieldDescriptor::DatetimeLocal(f)
            | FieldDescriptor::Month(f)
            | FieldDescriptor::Time(f) => Some(&f.base.name),
            FieldDescriptor::Number(f) | FieldDescriptor::Range(f) => Some(&f.base.name),
            FieldDescriptor::File(f) => Some(&f.base.name),
            FieldDescriptor::Hidden(f) => Some(&f.name),
            FieldDescriptor::Textarea(f) => Some(&f.base.name),
            FieldDescriptor::Checkbox(f) => Some(&f.base.name),
            FieldDescriptor::Radio(f) => Some(&f.base.name),
            FieldDescriptor::Select(f) => Some(&f.base.name),
            FieldDescriptor::CollectionCheckBoxes(f) => f.name(),
            FieldDescriptor::CollectionRadioButtons(f) => f.name(),
            FieldDescriptor::Submit(f) => f.name.as_deref(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            FieldDescriptor::Text(f)
            | FieldDescriptor::Email(f)
            | FieldDescriptor::Search(f)
            | FieldDescriptor::Password(f)
            | FieldDescriptor::Tel(f)
            | FieldDescriptor::Url(f)
            | FieldDescriptor::Color(f) => f.base.id.as_deref(),
            FieldDescriptor::Date(f)
            | FieldDescriptor::DatetimeLocal(f)
            | FieldDescriptor::Month(f)
            | FieldDescriptor::Time(f) => f.base.id.as_deref(),
            FieldDescriptor::Number(f) | FieldDescriptor::Range(f) => f.base.id.as_deref(),
            FieldDescriptor::File(f) => f.base.id.as_deref(),
            FieldDescriptor::Hidden(f) => f.id.as_deref(),
            FieldDescriptor::Textarea(f) => f.base.id.as_deref(),
            FieldDescriptor::Checkbox(f) => f.base.id.as_deref(),
            FieldDescriptor::Radio(f) => f.base.id.as_deref(),
            FieldDescriptor::Select(f) => f.base.id.as_deref(),
            FieldDescriptor::CollectionCheckBoxes(_)
            | FieldDescriptor::CollectionRadioButtons(_) => None,
            FieldDescriptor::Submit(f) => f.id.as_deref(),
        }
    }
}

fn check_shared_name<'a>(mut bases: impl Iterator<Item = &'a InputBase>) -> Result<()> {
    let Some(first) = bases.next() else {
        return Ok(());
    };
    for (offset, base) in bases.enumerate() {
        if base.name != first.name {
            return Err(DescriptorError::CollectionNameMismatch {
                index: offset + 1,
                expected: first.name.clone(),
                found: base.name.clone(),
            });
        }
    }
    Ok(())
}
