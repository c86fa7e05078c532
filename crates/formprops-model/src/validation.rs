//! Validation messages supplied out-of-band by the form layer.
//!
//! A [`ValidationErrors`] store is built once per render pass and never
//! mutated afterwards; renderers borrow it for the duration of the pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Message(s) recorded against one error key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationError {
    Message(String),
    Messages(Vec<String>),
}

impl ValidationError {
    /// Messages in display order. A single message is a one-element slice.
    pub fn messages(&self) -> &[String] {
        match self {
            ValidationError::Message(message) => std::slice::from_ref(message),
            ValidationError::Messages(messages) => messages,
        }
    }

    /// Display text: messages joined by a single space.
    pub fn joined(&self) -> String {
        self.messages().join(" ")
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        ValidationError::Message(message.to_string())
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::Message(message)
    }
}

impl From<Vec<String>> for ValidationError {
    fn from(messages: Vec<String>) -> Self {
        ValidationError::Messages(messages)
    }
}

impl From<Vec<&str>> for ValidationError {
    fn from(messages: Vec<&str>) -> Self {
        ValidationError::Messages(messages.into_iter().map(str::to_string).collect())
    }
}

/// Read-only map from error key to message(s).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: HashMap<String, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `key -> string | string[]`.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn get(&self, key: &str) -> Option<&ValidationError> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for ValidationErrors
where
    K: Into<String>,
    V: Into<ValidationError>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
