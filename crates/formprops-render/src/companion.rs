//! Hidden companion inputs.
//!
//! A browser leaves an unchecked checkbox, a fully deselected checkbox
//! group or an empty multi-select out of the form body entirely. The
//! companion generator decides which hidden inputs keep those keys present
//! and where they go relative to the visible control:
//!
//! | Control                    | `includeHidden` | Companion                               |
//! |----------------------------|-----------------|-----------------------------------------|
//! | checkbox                   | true            | same name, `uncheckedValue`             |
//! | checkbox / radio group     | true            | shared name, empty value, before items  |
//! | multi-select               | true            | select name, empty value                |
//! | single select, radio       | any             | none                                    |
//! | empty collection           | any             | none                                    |
//!
//! Only the single-checkbox companion moves with [`DecoderPrecedence`]:
//! before the checkbox for last-wins decoders, after it for first-wins.

use formprops_model::{
    CheckboxField, CollectionCheckBoxesField, CollectionRadioButtonsField, DecoderPrecedence,
    FieldDescriptor, SelectField,
};
use tracing::debug;

use crate::markup::Element;

/// A hidden `<input>` that keeps a key present in the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenInput {
    pub name: String,
    /// `None` writes no `value` attribute at all.
    pub value: Option<String>,
}

impl HiddenInput {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Group and multi-select companions submit an empty string.
    pub fn blank(name: impl Into<String>) -> Self {
        Self::new(name, Some(String::new()))
    }

    pub fn element(&self) -> Element {
        Element::input("hidden")
            .attr("name", self.name.as_str())
            .opt_attr("value", self.value.as_deref())
            .attr("autocomplete", "off")
    }
}

/// Where a companion goes relative to its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    BeforeControl,
    AfterControl,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::BeforeControl => "before",
            Placement::AfterControl => "after",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companion {
    pub input: HiddenInput,
    pub placement: Placement,
}

impl Companion {
    fn before(input: HiddenInput) -> Self {
        Self {
            input,
            placement: Placement::BeforeControl,
        }
    }

    pub fn is_before(&self) -> bool {
        self.placement == Placement::BeforeControl
    }
}

/// Decides the hidden companions for checkbox-kind and select controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanionGenerator {
    precedence: DecoderPrecedence,
}

impl CompanionGenerator {
    pub fn new(precedence: DecoderPrecedence) -> Self {
        Self { precedence }
    }

    pub fn precedence(&self) -> DecoderPrecedence {
        self.precedence
    }

    pub fn checkbox(&self, field: &CheckboxField) -> Option<Companion> {
        if !field.include_hidden {
            return None;
        }
        if field.unchecked_value.is_none() {
            debug!(
                name = %field.base.name,
                "checkbox includes a hidden input but has no unchecked value"
            );
        }
        let placement = match self.precedence {
            DecoderPrecedence::LastWins => Placement::BeforeControl,
            DecoderPrecedence::FirstWins => Placement::AfterControl,
        };
        Some(Companion {
            input: HiddenInput::new(&field.base.name, field.unchecked_value.clone()),
            placement,
        })
    }

    /// Group-level companion for a checkbox collection. Items still get
    /// their own through [`CompanionGenerator::checkbox`].
    pub fn checkbox_group(&self, field: &CollectionCheckBoxesField) -> Option<Companion> {
        group_companion(field.include_hidden, field.name())
    }

    pub fn radio_group(&self, field: &CollectionRadioButtonsField) -> Option<Companion> {
        group_companion(field.include_hidden, field.name())
    }

    pub fn select(&self, field: &SelectField) -> Option<Companion> {
        if !(field.multiple && field.include_hidden) {
            return None;
        }
        debug!(name = %field.base.name, "multi-select hidden input");
        Some(Companion::before(HiddenInput::blank(&field.base.name)))
    }

    /// Every companion a descriptor produces, in document order.
    pub fn for_descriptor(&self, descriptor: &FieldDescriptor) -> Vec<Companion> {
        match descriptor {
            FieldDescriptor::Checkbox(field) => self.checkbox(field).into_iter().collect(),
            FieldDescriptor::Select(field) => self.select(field).into_iter().collect(),
            FieldDescriptor::CollectionCheckBoxes(field) => self
                .checkbox_group(field)
                .into_iter()
                .chain(
                    field
                        .collection
                        .iter()
                        .filter_map(|item| self.checkbox(&item.field)),
                )
                .collect(),
            FieldDescriptor::CollectionRadioButtons(field) => {
                self.radio_group(field).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }
}

fn group_companion(include_hidden: bool, name: Option<&str>) -> Option<Companion> {
    if !include_hidden {
        return None;
    }
    let name = name?;
    debug!(name, "group hidden input");
    Some(Companion::before(HiddenInput::blank(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formprops_model::{InputBase, Labeled, RadioButtonField};

    fn checkbox(include_hidden: bool) -> CheckboxField {
        CheckboxField {
            base: InputBase::named("post[admin]").with_id("post_admin"),
            value: "1".to_string(),
            unchecked_value: Some("0".to_string()),
            include_hidden,
            ..Default::default()
        }
    }

    #[test]
    fn checkbox_companion_carries_unchecked_value() {
        let companion = CompanionGenerator::default()
            .checkbox(&checkbox(true))
            .expect("companion");
        assert_eq!(companion.input, HiddenInput::new("post[admin]", Some("0".into())));
        assert!(companion.is_before());
    }

    #[test]
    fn checkbox_without_include_hidden_has_no_companion() {
        assert_eq!(CompanionGenerator::default().checkbox(&checkbox(false)), None);
    }

    #[test]
    fn first_wins_moves_checkbox_companion_after() {
        let companion = CompanionGenerator::new(DecoderPrecedence::FirstWins)
            .checkbox(&checkbox(true))
            .expect("companion");
        assert_eq!(companion.placement, Placement::AfterControl);
    }

    #[test]
    fn missing_unchecked_value_writes_no_value_attribute() {
        let mut field = checkbox(true);
        field.unchecked_value = None;
        let companion = CompanionGenerator::default()
            .checkbox(&field)
            .expect("companion");
        assert_eq!(companion.input.element().attribute("value"), None);
        assert_eq!(companion.input.element().attribute("autocomplete"), Some("off"));
    }

    #[test]
    fn radio_group_companion_stays_first_under_both_precedences() {
        let field = CollectionRadioButtonsField {
            collection: vec![Labeled {
                field: RadioButtonField {
                    base: InputBase::named("post[grade]"),
                    value: "1".to_string(),
                    ..Default::default()
                },
                label: "one".to_string(),
            }],
            include_hidden: true,
        };
        for precedence in [DecoderPrecedence::LastWins, DecoderPrecedence::FirstWins] {
            let companion = CompanionGenerator::new(precedence)
                .radio_group(&field)
                .expect("group companion");
            assert!(companion.is_before());
            assert_eq!(companion.input, HiddenInput::blank("post[grade]"));
        }
    }

    #[test]
    fn empty_group_has_no_companion() {
        let field = CollectionCheckBoxesField {
            collection: Vec::new(),
            include_hidden: true,
        };
        assert_eq!(CompanionGenerator::default().checkbox_group(&field), None);
    }

    #[test]
    fn single_select_never_has_companion() {
        let field = SelectField {
            base: InputBase::named("post[category]"),
            include_hidden: true,
            ..Default::default()
        };
        assert_eq!(CompanionGenerator::default().select(&field), None);
    }
}
