//! Render options from a TOML file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use formprops_model::{DecoderPrecedence, RenderOptions, SkinKind};
use tracing::debug;

/// Parse options from TOML text. Missing keys keep their defaults.
pub fn parse_options(text: &str) -> Result<RenderOptions> {
    toml::from_str(text).context("parse render options")
}

/// Load options from `path`, or defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<RenderOptions> {
    let Some(path) = path else {
        return Ok(RenderOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let options = parse_options(&text).with_context(|| format!("in {}", path.display()))?;
    debug!(path = %path.display(), skin = %options.skin, "loaded render options");
    Ok(options)
}

/// Values given on the command line, applied on top of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub skin: Option<SkinKind>,
    pub precedence: Option<DecoderPrecedence>,
    /// Only turns pretty output on; a config file can still enable it.
    pub pretty: bool,
}

impl OptionOverrides {
    #[must_use]
    pub fn apply(&self, mut options: RenderOptions) -> RenderOptions {
        if let Some(skin) = self.skin {
            options.skin = skin;
        }
        if let Some(precedence) = self.precedence {
            options.precedence = precedence;
        }
        if self.pretty {
            options.pretty = true;
        }
        options
    }
}
