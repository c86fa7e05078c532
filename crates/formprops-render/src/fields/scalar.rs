//! Single-input controls with no companion logic.

use formprops_model::{
    FieldKind, FileField, HiddenField, NumericField, SubmitButton, TemporalField, TextAreaField,
    TextField,
};

use crate::error::Result;
use crate::markup::Element;
use crate::skin::FieldFrame;

use super::{RenderPass, named_input, pass_through, with_base_flags};

impl RenderPass<'_> {
    pub(super) fn text_like(
        &mut self,
        kind: FieldKind,
        field: &TextField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        let frame = FieldFrame::new(kind, field.base.id.as_deref());
        self.compose(frame, label, error_key, |pass, frame| {
            let control = named_input(kind.as_str(), &field.base)
                .opt_attr("value", field.value.as_deref().or(field.default_value.as_deref()))
                .opt_attr("placeholder", field.placeholder.as_deref())
                .opt_display("size", field.size)
                .opt_display("maxlength", field.max_length);
            pass.control(frame, with_base_flags(control, &field.base))
        })
    }

    pub(super) fn temporal(
        &mut self,
        kind: FieldKind,
        field: &TemporalField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        let frame = FieldFrame::new(kind, field.base.id.as_deref());
        self.compose(frame, label, error_key, |pass, frame| {
            let control = named_input(kind.as_str(), &field.base)
                .opt_attr("value", field.value.as_deref().or(field.default_value.as_deref()))
                .opt_attr("min", field.min.as_deref())
                .opt_attr("max", field.max.as_deref())
                .opt_display("step", field.step);
            pass.control(frame, with_base_flags(control, &field.base))
        })
    }

    pub(super) fn numeric(
        &mut self,
        kind: FieldKind,
        field: &NumericField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        let frame = FieldFrame::new(kind, field.base.id.as_deref());
        self.compose(frame, label, error_key, |pass, frame| {
            let control = named_input(kind.as_str(), &field.base)
                .opt_attr("value", field.value.as_deref().or(field.default_value.as_deref()))
                .opt_attr("placeholder", field.placeholder.as_deref())
                .opt_display("min", field.min)
                .opt_display("max", field.max)
                .opt_display("step", field.step);
            pass.control(frame, with_base_flags(control, &field.base))
        })
    }

    pub(super) fn file(
        &mut self,
        field: &FileField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        let frame = FieldFrame::new(FieldKind::File, field.base.id.as_deref());
        self.compose(frame, label, error_key, |pass, frame| {
            let control = named_input("file", &field.base)
                .opt_attr("accept", field.accept.as_deref())
                .flag("multiple", field.multiple);
            pass.control(frame, with_base_flags(control, &field.base))
        })
    }

    /// Bare hidden input: no label, no error, no skin.
    pub(super) fn hidden_field(&mut self, field: &HiddenField) -> Result<()> {
        let mut element = Element::input("hidden")
            .attr("name", field.name.as_str())
            .opt_attr("id", field.id.as_deref())
            .opt_attr("value", field.value.as_deref().or(field.default_value.as_deref()))
            .attr("autocomplete", "off");
        pass_through(&mut element, &field.attributes);
        self.out.empty(&element)
    }

    pub(super) fn textarea(
        &mut self,
        field: &TextAreaField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        let frame = FieldFrame::new(FieldKind::Textarea, field.base.id.as_deref());
        self.compose(frame, label, error_key, |pass, frame| {
            let control = Element::new("textarea")
                .attr("name", field.base.name.as_str())
                .opt_attr("id", field.base.id.as_deref())
                .opt_attr("placeholder", field.placeholder.as_deref())
                .opt_display("rows", field.rows)
                .opt_display("cols", field.cols);
            let mut control = with_base_flags(control, &field.base);
            pass.skin.decorate_control(frame, &mut control);
            let text = field
                .value
                .as_deref()
                .or(field.default_value.as_deref())
                .unwrap_or_default();
            pass.out.text_element(&control, text)
        })
    }

    pub(super) fn submit(&mut self, field: &SubmitButton) -> Result<()> {
        let frame = FieldFrame::new(FieldKind::Submit, field.id.as_deref());
        let mut button = Element::new("button")
            .attr("type", "submit")
            .opt_attr("name", field.name.as_deref())
            .opt_attr("id", field.id.as_deref())
            .flag("disabled", field.disabled);
        if let Some(class_name) = &field.class_name {
            button.add_class(class_name);
        }
        pass_through(&mut button, &field.attributes);
        self.skin.decorate_control(&frame, &mut button);
        self.out.text_element(&button, &field.text)
    }
}
