use std::io;
use thiserror::Error;

/// Errors that can occur while loading or validating a plugin manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Method at index {index} has no name")]
    MissingMethodName { index: usize },

    #[error("Enum attached to {location} has no name")]
    EmptyEnumName { location: String },

    #[error("Prototype attached to non-function type '{tag}' at {location}")]
    StrayPrototype { tag: String, location: String },
}
