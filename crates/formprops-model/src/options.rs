//! Configuration options for rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Presentational skin used to render descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinKind {
    /// Bare markup: label, control, `<span>` error text.
    #[default]
    Vanilla,
    /// Wrapper `<div>`s and configurable CSS classes.
    Classed,
}

impl SkinKind {
    pub const ALL: [SkinKind; 2] = [SkinKind::Vanilla, SkinKind::Classed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinKind::Vanilla => "vanilla",
            SkinKind::Classed => "classed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SkinKind::Vanilla => "Unstyled label, control and inline error text",
            SkinKind::Classed => "Field wrappers with configurable CSS classes",
        }
    }
}

impl fmt::Display for SkinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkinKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vanilla" => Ok(SkinKind::Vanilla),
            "classed" => Ok(SkinKind::Classed),
            _ => Err(format!("Unknown skin: {}", s)),
        }
    }
}

/// Which occurrence of a repeated scalar name the consuming decoder keeps.
///
/// Rack and most server-side parsers keep the last one, so the unchecked
/// fallback goes before the checkbox. Decoders that keep the first one need
/// the fallback after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecoderPrecedence {
    #[default]
    LastWins,
    FirstWins,
}

impl DecoderPrecedence {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecoderPrecedence::LastWins => "last-wins",
            DecoderPrecedence::FirstWins => "first-wins",
        }
    }
}

impl fmt::Display for DecoderPrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DecoderPrecedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-wins" | "last" => Ok(DecoderPrecedence::LastWins),
            "first-wins" | "first" => Ok(DecoderPrecedence::FirstWins),
            _ => Err(format!("Unknown decoder precedence: {}", s)),
        }
    }
}

/// CSS classes applied by the classed skin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinClasses {
    /// Wrapper around label, control and error.
    pub field: String,
    pub label: String,
    /// Text-like controls, textareas and selects.
    pub control: String,
    /// Checkbox and radio inputs.
    pub check: String,
    /// Wrapper around one checkbox or radio and its label.
    pub choice: String,
    pub error: String,
    /// Added to a control whose error key resolved to a message.
    pub invalid: String,
}

impl Default for SkinClasses {
    fn default() -> Self {
        Self {
            field: "field".to_string(),
            label: "field-label".to_string(),
            control: "field-control".to_string(),
            check: "field-check".to_string(),
            choice: "field-choice".to_string(),
            error: "field-error".to_string(),
            invalid: "is-invalid".to_string(),
        }
    }
}

/// Options controlling how a render pass writes markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub skin: SkinKind,
    pub precedence: DecoderPrecedence,
    /// Break lines between form-level elements. Compact markup otherwise.
    pub pretty: bool,
    pub classes: SkinClasses,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_skin(mut self, skin: SkinKind) -> Self {
        self.skin = skin;
        self
    }

    #[must_use]
    pub fn with_precedence(mut self, precedence: DecoderPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_classes(mut self, classes: SkinClasses) -> Self {
        self.classes = classes;
        self
    }
}
