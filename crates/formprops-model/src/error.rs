use thiserror::Error;

/// Errors raised while constructing descriptors from a helper payload.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The payload is not valid JSON or does not match any descriptor shape.
    #[error("invalid descriptor payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A single select was given a list of current values.
    #[error("select {name} is not multiple but was given {count} values")]
    ScalarSelectGivenList { name: String, count: usize },

    /// A collection item does not share the collection's submission name.
    #[error("collection item {index} is named {found}, expected {expected}")]
    CollectionNameMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, DescriptorError>;
