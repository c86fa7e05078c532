use formprops_model::{FieldKind, SkinClasses};

use crate::error::Result;
use crate::markup::{Element, MarkupWriter};

use super::{FieldFrame, Skin, label_element};

/// Wraps each field in a `<div>` and applies [`SkinClasses`].
///
/// Invalid controls get the `invalid` class and `aria-invalid="true"`.
#[derive(Debug, Clone, Default)]
pub struct ClassedSkin {
    classes: SkinClasses,
}

impl ClassedSkin {
    pub fn new(classes: SkinClasses) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &SkinClasses {
        &self.classes
    }

    fn div(class: &str) -> Element {
        let mut div = Element::new("div");
        div.add_class(class);
        div
    }
}

impl Skin for ClassedSkin {
    fn name(&self) -> &'static str {
        "classed"
    }

    fn begin_field(&self, out: &mut MarkupWriter, _frame: &FieldFrame<'_>) -> Result<()> {
        out.open(&Self::div(&self.classes.field))
    }

    fn end_field(&self, out: &mut MarkupWriter, _frame: &FieldFrame<'_>) -> Result<()> {
        out.close("div")
    }

    fn label(&self, out: &mut MarkupWriter, frame: &FieldFrame<'_>, text: &str) -> Result<()> {
        let mut label = label_element(frame);
        label.add_class(&self.classes.label);
        out.text_element(&label, text)
    }

    fn decorate_control(&self, frame: &FieldFrame<'_>, control: &mut Element) {
        match frame.kind {
            FieldKind::Submit | FieldKind::Hidden => return,
            kind if kind.is_checkable() => control.add_class(&self.classes.check),
            _ => control.add_class(&self.classes.control),
        }
        if frame.invalid {
            control.add_class(&self.classes.invalid);
            control.set_attr("aria-invalid", "true");
        }
    }

    fn error(&self, out: &mut MarkupWriter, _frame: &FieldFrame<'_>, message: &str) -> Result<()> {
        out.text_element(&Self::div(&self.classes.error), message)
    }

    fn begin_choice(&self, out: &mut MarkupWriter, _frame: &FieldFrame<'_>) -> Result<()> {
        out.open(&Self::div(&self.classes.choice))
    }

    fn end_choice(&self, out: &mut MarkupWriter, _frame: &FieldFrame<'_>) -> Result<()> {
        out.close("div")
    }
}
