//! Field renderers.
//!
//! Every visible field is composed the same way through [`RenderPass::compose`]:
//! skin wrapper, label, control(s), bound error. Collections put their group
//! hidden input ahead of the label. Per-kind modules only build
//! the control markup and ask the companion generator for hidden inputs.

mod choice;
mod form;
mod scalar;
mod select;

use formprops_model::{
    FieldDescriptor, FieldEntry, FieldKind, HtmlAttributes, InputBase, RenderOptions,
    ValidationErrors,
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::binder::ErrorBinder;
use crate::companion::{CompanionGenerator, HiddenInput};
use crate::error::Result;
use crate::markup::{Element, MarkupWriter};
use crate::skin::{FieldFrame, Skin};

/// One render pass: a skin, one borrowed error store and an output buffer.
pub struct RenderPass<'a> {
    skin: &'a dyn Skin,
    binder: ErrorBinder<'a>,
    companions: CompanionGenerator,
    pretty: bool,
    out: MarkupWriter,
}

impl<'a> RenderPass<'a> {
    pub fn new(skin: &'a dyn Skin, options: &RenderOptions, errors: &'a ValidationErrors) -> Self {
        Self {
            skin,
            binder: ErrorBinder::new(errors),
            companions: CompanionGenerator::new(options.precedence),
            pretty: options.pretty,
            out: MarkupWriter::new(),
        }
    }

    pub fn binder(&self) -> &ErrorBinder<'a> {
        &self.binder
    }

    pub fn field(&mut self, entry: &FieldEntry) -> Result<()> {
        self.descriptor(
            &entry.input,
            entry.label.as_deref(),
            entry.error_key.as_deref(),
        )
    }

    /// Renders one descriptor with an optional label and error key.
    pub fn descriptor(
        &mut self,
        descriptor: &FieldDescriptor,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        trace!(
            kind = %descriptor.kind(),
            name = descriptor.name().unwrap_or_default(),
            "rendering field"
        );
        match descriptor {
            FieldDescriptor::Text(field) => self.text_like(FieldKind::Text, field, label, error_key),
            FieldDescriptor::Email(field) => {
                self.text_like(FieldKind::Email, field, label, error_key)
            }
            FieldDescriptor::Search(field) => {
                self.text_like(FieldKind::Search, field, label, error_key)
            }
            FieldDescriptor::Password(field) => {
                self.text_like(FieldKind::Password, field, label, error_key)
            }
            FieldDescriptor::Tel(field) => self.text_like(FieldKind::Tel, field, label, error_key),
            FieldDescriptor::Url(field) => self.text_like(FieldKind::Url, field, label, error_key),
            FieldDescriptor::Color(field) => {
                self.text_like(FieldKind::Color, field, label, error_key)
            }
            FieldDescriptor::Date(field) => {
                self.temporal(FieldKind::Date, field, label, error_key)
            }
            FieldDescriptor::DatetimeLocal(field) => {
                self.temporal(FieldKind::DatetimeLocal, field, label, error_key)
            }
            FieldDescriptor::Month(field) => {
                self.temporal(FieldKind::Month, field, label, error_key)
            }
            FieldDescriptor::Time(field) => {
                self.temporal(FieldKind::Time, field, label, error_key)
            }
            FieldDescriptor::Number(field) => {
                self.numeric(FieldKind::Number, field, label, error_key)
            }
            FieldDescriptor::Range(field) => {
                self.numeric(FieldKind::Range, field, label, error_key)
            }
            FieldDescriptor::File(field) => self.file(field, label, error_key),
            FieldDescriptor::Hidden(field) => self.hidden_field(field),
            FieldDescriptor::Textarea(field) => self.textarea(field, label, error_key),
            FieldDescriptor::Checkbox(field) => self.checkbox(field, label, error_key),
            FieldDescriptor::Radio(field) => self.radio(field, label, error_key),
            FieldDescriptor::Select(field) => self.select(field, label, error_key),
            FieldDescriptor::CollectionCheckBoxes(field) => {
                self.collection_check_boxes(field, label, error_key)
            }
            FieldDescriptor::CollectionRadioButtons(field) => {
                self.collection_radio_buttons(field, label, error_key)
            }
            FieldDescriptor::Submit(field) => self.submit(field),
        }
    }

    /// Label and bound error around a caller-supplied control.
    ///
    /// For composite widgets that replace the stock control; `control`
    /// writes whatever markup stands in for it.
    pub fn custom_field<F>(
        &mut self,
        kind: FieldKind,
        id: Option<&str>,
        label: Option<&str>,
        error_key: Option<&str>,
        control: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut MarkupWriter) -> Result<()>,
    {
        self.compose(FieldFrame::new(kind, id), label, error_key, |pass, _| {
            control(&mut pass.out)
        })
    }

    pub fn finish(self) -> Result<String> {
        self.out.into_string()
    }

    fn compose<F>(
        &mut self,
        frame: FieldFrame<'_>,
        label: Option<&str>,
        error_key: Option<&str>,
        control: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Self, &FieldFrame<'_>) -> Result<()>,
    {
        self.compose_with_lead(frame, None, label, error_key, control)
    }

    /// Like [`RenderPass::compose`], with a hidden input written ahead of
    /// the label inside the skin wrapper.
    fn compose_with_lead<F>(
        &mut self,
        frame: FieldFrame<'_>,
        lead: Option<&HiddenInput>,
        label: Option<&str>,
        error_key: Option<&str>,
        control: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Self, &FieldFrame<'_>) -> Result<()>,
    {
        let message = self.binder.resolve(error_key);
        let frame = frame.with_invalid(message.is_some());
        self.skin.begin_field(&mut self.out, &frame)?;
        if let Some(lead) = lead {
            self.hidden(lead)?;
        }
        if let Some(label) = label {
            self.skin.label(&mut self.out, &frame, label)?;
        }
        control(self, &frame)?;
        if let Some(message) = message {
            self.skin.error(&mut self.out, &frame, &message)?;
        }
        self.skin.end_field(&mut self.out, &frame)
    }

    /// Writes a void control after the skin has decorated it.
    fn control(&mut self, frame: &FieldFrame<'_>, mut element: Element) -> Result<()> {
        self.skin.decorate_control(frame, &mut element);
        self.out.empty(&element)
    }

    fn hidden(&mut self, input: &HiddenInput) -> Result<()> {
        self.out.empty(&input.element())
    }

    fn line_break(&mut self) {
        if self.pretty {
            self.out.line_break();
        }
    }
}

/// `<input type name id>`; value-like attributes go after this.
fn named_input(input_type: &'static str, base: &InputBase) -> Element {
    Element::input(input_type)
        .attr("name", base.name.as_str())
        .opt_attr("id", base.id.as_deref())
}

/// Trailing `required`, `disabled` and `class` shared by every named control,
/// then the descriptor's pass-through attributes.
fn with_base_flags(element: Element, base: &InputBase) -> Element {
    let mut element = element
        .flag("required", base.required)
        .flag("disabled", base.disabled);
    if let Some(class_name) = &base.class_name {
        element.add_class(class_name);
    }
    pass_through(&mut element, &base.attributes);
    element
}

/// Helper vocabulary that never becomes markup.
const HELPER_KEYS: [&str; 4] = ["includeHidden", "uncheckedValue", "label", "errorKey"];

/// Writes payload attributes the renderer does not type itself.
///
/// Keys are mapped the way a JSX spread would write them: `data-*` and
/// `aria-*` verbatim, `htmlFor` and `className` to `for` and `class`,
/// anything else lowercased (`readOnly` becomes `readonly`). Strings and
/// numbers are written as text; `true` is a boolean attribute and `false`
/// or `null` drop it, except on `data-*`/`aria-*` where both are text.
/// Attributes the control already carries are never replaced.
fn pass_through(element: &mut Element, attributes: &HtmlAttributes) {
    for (key, value) in attributes {
        if HELPER_KEYS.contains(&key.as_str()) {
            continue;
        }
        if !is_attribute_name(key) {
            debug!(key = %key, "skipping attribute with an unusable name");
            continue;
        }
        let name = attribute_name(key);
        let verbatim = name.starts_with("data-") || name.starts_with("aria-");
        let text = match value {
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) if verbatim => flag.to_string(),
            Value::Bool(true) => name.clone(),
            Value::Bool(false) | Value::Null => continue,
            Value::Array(_) | Value::Object(_) => {
                debug!(key = %key, "skipping structured attribute value");
                continue;
            }
        };
        if !element.set_attr_if_absent(name, text) {
            trace!(key = %key, "attribute already set by the renderer");
        }
    }
}

fn attribute_name(key: &str) -> String {
    match key {
        "htmlFor" => "for".to_string(),
        "className" => "class".to_string(),
        key if key.contains('-') => key.to_string(),
        key => key.to_ascii_lowercase(),
    }
}

fn is_attribute_name(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}
