use formprops_model::FormPayload;
use tracing::debug;

use crate::error::Result;
use crate::markup::Element;

use super::RenderPass;

impl RenderPass<'_> {
    /// `<form>`, helper extras in payload order, every field entry in order.
    pub fn form(&mut self, payload: &FormPayload) -> Result<()> {
        let attrs = &payload.form;
        let element = Element::new("form")
            .opt_attr("id", attrs.id.as_deref())
            .opt_attr("class", attrs.class_name.as_deref())
            .opt_attr("action", attrs.action.as_deref())
            .opt_attr("method", attrs.method.as_deref())
            .opt_attr("accept-charset", attrs.accept_charset.as_deref())
            .opt_attr("enctype", attrs.enc_type.as_deref());
        debug!(
            extras = payload.extras.len(),
            fields = payload.fields.len(),
            "rendering form"
        );
        self.out.open(&element)?;
        self.line_break();
        for extra in payload.extras.values() {
            self.hidden_field(extra)?;
            self.line_break();
        }
        for entry in &payload.fields {
            self.field(entry)?;
            self.line_break();
        }
        self.out.close("form")
    }
}
