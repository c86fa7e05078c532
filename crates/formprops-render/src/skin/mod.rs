//! Presentational skins.
//!
//! A skin decides how a field looks: wrappers, label and error markup,
//! classes on the control. It never decides which hidden inputs exist or
//! where they go; those come from [`crate::companion`] before a skin is
//! consulted.

mod classed;
mod vanilla;

pub use classed::ClassedSkin;
pub use vanilla::VanillaSkin;

use formprops_model::{FieldKind, RenderOptions, SkinKind};

use crate::error::Result;
use crate::markup::{Element, MarkupWriter};

/// What a skin knows about the field it is decorating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFrame<'a> {
    pub kind: FieldKind,
    /// `id` of the labelled control; `None` for collections.
    pub id: Option<&'a str>,
    /// The field's error key resolved to a message.
    pub invalid: bool,
}

impl<'a> FieldFrame<'a> {
    pub fn new(kind: FieldKind, id: Option<&'a str>) -> Self {
        Self {
            kind,
            id,
            invalid: false,
        }
    }

    #[must_use]
    pub fn with_invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

/// Presentation hooks called by the field renderers in a fixed order:
/// `begin_field`, `label`, control(s) via `decorate_control`, `error`,
/// `end_field`. Collections write their group hidden input right after
/// `begin_field`. Each collection item is wrapped by `begin_choice` /
/// `end_choice` around its input and `choice_label`, with the label first
/// when `label_before_choice` says so.
pub trait Skin: Send + Sync {
    fn name(&self) -> &'static str;

    fn begin_field(&self, _out: &mut MarkupWriter, _frame: &FieldFrame<'_>) -> Result<()> {
        Ok(())
    }

    fn end_field(&self, _out: &mut MarkupWriter, _frame: &FieldFrame<'_>) -> Result<()> {
        Ok(())
    }

    fn label(&self, out: &mut MarkupWriter, frame: &FieldFrame<'_>, text: &str) -> Result<()>;

    /// Adjusts a visible control before it is written.
    fn decorate_control(&self, _frame: &FieldFrame<'_>, _control: &mut Element) {}

    fn error(&self, out: &mut MarkupWriter, frame: &FieldFrame<'_>, message: &str) -> Result<()>;

    fn begin_choice(&self, _out: &mut MarkupWriter, _frame: &FieldFrame<'_>) -> Result<()> {
        Ok(())
    }

    fn end_choice(&self, _out: &mut MarkupWriter, _frame: &FieldFrame<'_>) -> Result<()> {
        Ok(())
    }

    /// Whether a collection item's label goes before its input.
    fn label_before_choice(&self, _frame: &FieldFrame<'_>) -> bool {
        false
    }

    /// Label written next to a collection item's input.
    fn choice_label(
        &self,
        out: &mut MarkupWriter,
        frame: &FieldFrame<'_>,
        text: &str,
    ) -> Result<()> {
        self.label(out, frame, text)
    }
}

/// Builds the skin selected by `options`.
pub fn skin_for(options: &RenderOptions) -> Box<dyn Skin> {
    match options.skin {
        SkinKind::Vanilla => Box::new(VanillaSkin),
        SkinKind::Classed => Box::new(ClassedSkin::new(options.classes.clone())),
    }
}

pub(crate) fn label_element(frame: &FieldFrame<'_>) -> Element {
    Element::new("label").opt_attr("for", frame.id)
}
