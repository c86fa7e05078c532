//! Field descriptor model for form-helper payloads.
//!
//! - [`FieldDescriptor`]: one tagged variant per control kind
//! - [`ValidationErrors`]: read-only error-key to message(s) store
//! - [`FormPayload`]: form attributes, helper extras and field entries
//! - [`RenderOptions`]: skin, decoder precedence and class configuration

mod de;
pub mod error;
pub mod field;
pub mod form;
pub mod options;
pub mod validation;

pub use error::{DescriptorError, Result};
pub use field::{
    CheckboxField, CollectionCheckBoxesField, CollectionRadioButtonsField, FieldDescriptor,
    FieldKind, FileField, HiddenField, HtmlAttributes, InputBase, Labeled, NumericField,
    RadioButtonField, SelectEntry, SelectField, SelectOption, SelectOptionGroup, SelectValue,
    SubmitButton, TemporalField, TextAreaField, TextField,
};
pub use form::{FieldEntry, FormAttributes, FormPayload};
pub use options::{DecoderPrecedence, RenderOptions, SkinClasses, SkinKind};
pub use validation::{ValidationError, ValidationErrors};
