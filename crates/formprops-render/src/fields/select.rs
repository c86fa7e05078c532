use formprops_model::{FieldKind, SelectEntry, SelectField, SelectOption};

use crate::error::Result;
use crate::markup::Element;
use crate::skin::FieldFrame;

use super::{RenderPass, with_base_flags};

impl RenderPass<'_> {
    /// Multi-select companion, then `<select>` with options and groups in
    /// input order. Selection is membership of the option value in the
    /// current values; nothing on the descriptor changes.
    pub(super) fn select(
        &mut self,
        field: &SelectField,
        label: Option<&str>,
        error_key: Option<&str>,
    ) -> Result<()> {
        let frame = FieldFrame::new(FieldKind::Select, field.base.id.as_deref());
        let companion = self.companions.select(field);
        self.compose(frame, label, error_key, |pass, frame| {
            if let Some(companion) = &companion {
                pass.hidden(&companion.input)?;
            }
            let control = Element::new("select")
                .attr("name", field.base.name.as_str())
                .opt_attr("id", field.base.id.as_deref())
                .flag("multiple", field.multiple);
            let mut control = with_base_flags(control, &field.base);
            pass.skin.decorate_control(frame, &mut control);
            pass.out.open(&control)?;
            for entry in &field.options {
                match entry {
                    SelectEntry::Item(option) => pass.option(field, option)?,
                    SelectEntry::Group(group) => {
                        pass.out
                            .open(&Element::new("optgroup").attr("label", group.label.as_str()))?;
                        for option in &group.options {
                            pass.option(field, option)?;
                        }
                        pass.out.close("optgroup")?;
                    }
                }
            }
            pass.out.close("select")
        })
    }

    fn option(&mut self, field: &SelectField, option: &SelectOption) -> Result<()> {
        let element = Element::new("option")
            .attr("value", option.value.as_str())
            .flag("selected", field.is_selected(option))
            .flag("disabled", option.disabled);
        self.out.text_element(&element, &option.label)
    }
}
