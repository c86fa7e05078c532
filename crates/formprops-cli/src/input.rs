//! Reading payloads and error maps from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use formprops_model::{FormPayload, ValidationErrors};

/// Reads `path`, with `-` meaning stdin.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read payload from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

pub fn load_payload(path: &Path) -> Result<FormPayload> {
    let text = read_source(path)?;
    FormPayload::from_json(&text).with_context(|| format!("parse form payload {}", path.display()))
}

/// Error map for the pass: the `--errors` file when given, else the
/// payload's own `validationErrors`.
pub fn load_errors(path: Option<&Path>, payload: &FormPayload) -> Result<ValidationErrors> {
    match path {
        Some(path) => {
            let text = read_source(path)?;
            ValidationErrors::from_json(&text)
                .with_context(|| format!("parse validation errors {}", path.display()))
        }
        None => Ok(payload.validation_errors.clone()),
    }
}
