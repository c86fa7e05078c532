//! Checkboxes, radio buttons and their collections.

use formprops_model::{
    CheckboxField, CollectionCheckBoxesField, CollectionRadioButtonsField, FieldKind,
    RadioButtonField,
};
use tracing::debug;

use crate::companion::Companion;
use crate::error::Result;
use crate::markup::Element;
use crate::skin::FieldFrame;

use super::{RenderPass, named_input, with_base_flags};

fn checkbox_element(field: &CheckboxField) -> Element {
    let element = named_input("checkbox", &field.base)
        .attr("value", field.value.as_str())
        .flag("checked", field.is_checked());
    with_base_flags(element, &field.base)
}

fn radio_element(field: &RadioButtonField) -> Element {
    let element = named_input("radio", &field.base)
        .attr("value", field.value.as_str())
        .flag("checked", field.is_checked());
    with_base_flags(element, &field.base)
}

impl RenderPass<'_> {
    pub(super) fn checkbox(
        &mut self,
        field: &CheckboxField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        let frame = FieldFrame::new(FieldKind::Checkbox, field.base.id.as_deref());
        let companion = self.companions.checkbox(field);
        self.compose(frame, label, error_key, |pass, frame| {
            pass.checkbox_with_companion(frame, field, companion.as_ref())
        })
    }

    fn checkbox_with_companion(
        &mut self,
        frame: &FieldFrame<'_>,
        field: &CheckboxField,
        companion: Option<&Companion>,
    ) -> Result<()> {
        if let Some(companion) = companion.filter(|c| c.is_before()) {
            self.hidden(&companion.input)?;
        }
        self.control(frame, checkbox_element(field))?;
        if let Some(companion) = companion.filter(|c| !c.is_before()) {
            self.hidden(&companion.input)?;
        }
        Ok(())
    }

    pub(super) fn radio(
        &mut self,
        field: &RadioButtonField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        let frame = FieldFrame::new(FieldKind::Radio, field.base.id.as_deref());
        self.compose(frame, label, error_key, |pass, frame| {
            pass.control(frame, radio_element(field))
        })
    }

    /// Group hidden input, group label, then each item's checkbox and label.
    /// Each item keeps its own checkbox companion. An empty collection
    /// writes nothing.
    pub(super) fn collection_check_boxes(
        &mut self,
        field: &CollectionCheckBoxesField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        if field.collection.is_empty() {
            debug!("empty checkbox collection renders nothing");
            return Ok(());
        }
        let group = self.companions.checkbox_group(field);
        let lead = group.as_ref().map(|group| &group.input);
        let frame = FieldFrame::new(FieldKind::CollectionCheckBoxes, None);
        self.compose_with_lead(frame, lead, label, error_key, |pass, frame| {
            for item in &field.collection {
                let item_frame = FieldFrame::new(FieldKind::Checkbox, item.field.base.id.as_deref())
                    .with_invalid(frame.invalid);
                let companion = pass.companions.checkbox(&item.field);
                pass.choice(&item_frame, &item.label, |pass| {
                    pass.checkbox_with_companion(&item_frame, &item.field, companion.as_ref())
                })?;
            }
            Ok(())
        })
    }

    /// Group hidden input, group label, then each item's radio and label.
    /// Radio items never get a companion of their own.
    pub(super) fn collection_radio_buttons(
        &mut self,
        field: &CollectionRadioButtonsField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        if field.collection.is_empty() {
            debug!("empty radio collection renders nothing");
            return Ok(());
        }
        let group = self.companions.radio_group(field);
        let lead = group.as_ref().map(|group| &group.input);
        let frame = FieldFrame::new(FieldKind::CollectionRadioButtons, None);
        self.compose_with_lead(frame, lead, label, error_key, |pass, frame| {
            for item in &field.collection {
                let item_frame = FieldFrame::new(FieldKind::Radio, item.field.base.id.as_deref())
                    .with_invalid(frame.invalid);
                pass.choice(&item_frame, &item.label, |pass| {
                    pass.control(&item_frame, radio_element(&item.field))
                })?;
            }
            Ok(())
        })
    }

    /// One collection item: the skin's choice wrapper around the item
    /// input and its label, in the order the skin asks for.
    fn choice<F>(&mut self, frame: &FieldFrame<'_>, label: &str, input: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let label_first = self.skin.label_before_choice(frame);
        self.skin.begin_choice(&mut self.out, frame)?;
        if label_first {
            self.skin.choice_label(&mut self.out, frame, label)?;
        }
        input(self)?;
        if !label_first {
            self.skin.choice_label(&mut self.out, frame, label)?;
        }
        self.skin.end_choice(&mut self.out, frame)
    }
}
