//! Error types for content loading

use thiserror::Error;

/// Errors raised while building the content store
///
/// Lookups never fail with these: a missing post is `None`, a missing
/// author or unknown layout degrades silently.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Malformed {field} in post '{slug}': {value:?} is not a valid date")]
    MalformedDate {
        slug: String,
        field: &'static str,
        value: String,
    },

    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
