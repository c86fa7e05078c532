use formprops_model::FieldKind;

use crate::error::Result;
use crate::markup::{Element, MarkupWriter};

use super::{FieldFrame, Skin, label_element};

/// Unstyled markup: `<label for>`, the control, then the error in a `<span>`.
///
/// Checkbox collection items render like standalone checkboxes, label
/// first and unwrapped. Radio collection items sit in a bare `<div>` with
/// the label after the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaSkin;

impl Skin for VanillaSkin {
    fn name(&self) -> &'static str {
        "vanilla"
    }

    fn label(&self, out: &mut MarkupWriter, frame: &FieldFrame<'_>, text: &str) -> Result<()> {
        out.text_element(&label_element(frame), text)
    }

    fn error(&self, out: &mut MarkupWriter, _frame: &FieldFrame<'_>, message: &str) -> Result<()> {
        out.text_element(&Element::new("span"), message)
    }

    fn label_before_choice(&self, frame: &FieldFrame<'_>) -> bool {
        frame.kind == FieldKind::Checkbox
    }

    fn begin_choice(&self, out: &mut MarkupWriter, frame: &FieldFrame<'_>) -> Result<()> {
        if frame.kind == FieldKind::Radio {
            out.open(&Element::new("div"))?;
        }
        Ok(())
    }

    fn end_choice(&self, out: &mut MarkupWriter, frame: &FieldFrame<'_>) -> Result<()> {
        if frame.kind == FieldKind::Radio {
            out.close("div")?;
        }
        Ok(())
    }
}
