//! HTML rendering for form-helper field descriptors.
//!
//! The interesting part is the submission contract: checkboxes, checkbox
//! and radio collections, and multi-selects get hidden companion inputs so
//! the form body always carries the keys an array-parameter decoder
//! expects. Presentation is delegated to a [`Skin`]; companion placement
//! and error binding are shared by every skin.
//!
//! ```ignore
//! let renderer = FormRenderer::new(RenderOptions::default());
//! let html = renderer.render_form(&FormPayload::from_json(payload)?)?;
//! ```

pub mod binder;
pub mod companion;
pub mod error;
pub mod fields;
pub mod markup;
pub mod skin;

pub use binder::ErrorBinder;
pub use companion::{Companion, CompanionGenerator, HiddenInput, Placement};
pub use error::{RenderError, Result};
pub use fields::RenderPass;
pub use markup::{Element, MarkupWriter};
pub use skin::{ClassedSkin, FieldFrame, Skin, VanillaSkin, skin_for};

use formprops_model::{FieldDescriptor, FieldEntry, FormPayload, RenderOptions, ValidationErrors};

/// Renders fields and forms with one skin and one set of options.
///
/// The renderer holds no per-pass state: each call builds a fresh
/// [`RenderPass`] over the error store it is given.
pub struct FormRenderer {
    options: RenderOptions,
    skin: Box<dyn Skin>,
}

impl FormRenderer {
    pub fn new(options: RenderOptions) -> Self {
        let skin = skin_for(&options);
        Self { options, skin }
    }

    /// Uses a caller-provided skin instead of the one named in `options`.
    pub fn with_skin(options: RenderOptions, skin: Box<dyn Skin>) -> Self {
        Self { options, skin }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn skin(&self) -> &dyn Skin {
        self.skin.as_ref()
    }

    pub fn pass<'a>(&'a self, errors: &'a ValidationErrors) -> RenderPass<'a> {
        RenderPass::new(self.skin.as_ref(), &self.options, errors)
    }

    pub fn render_field(&self, entry: &FieldEntry, errors: &ValidationErrors) -> Result<String> {
        let mut pass = self.pass(errors);
        pass.field(entry)?;
        pass.finish()
    }

    pub fn render_descriptor(
        &self,
        descriptor: &FieldDescriptor,
        label: Option<&str>,
        error_key: Option<&str>,
        errors: &ValidationErrors,
    ) -> Result<String> {
        let mut pass = self.pass(errors);
        pass.descriptor(descriptor, label, error_key)?;
        pass.finish()
    }

    /// Renders a whole form against the payload's own validation errors.
    pub fn render_form(&self, payload: &FormPayload) -> Result<String> {
        self.render_form_with_errors(payload, &payload.validation_errors)
    }

    pub fn render_form_with_errors(
        &self,
        payload: &FormPayload,
        errors: &ValidationErrors,
    ) -> Result<String> {
        let mut pass = self.pass(errors);
        pass.form(payload)?;
        pass.finish()
    }
}

impl Default for FormRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
