use thiserror::Error;

/// Errors that can occur while compiling a manifest into stub text
///
/// Every failure is deterministic for a given manifest and terminal:
/// a failed compilation never produces a partial artifact.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Unsupported type '{tag}' at {location}")]
    UnresolvedType { tag: String, location: String },

    #[error("Enum '{name}' redefined with a different definition")]
    EnumRedefinition { name: String },

    #[error("Delegate prototypes nested too deeply at {location}")]
    DelegateDepthExceeded { location: String },
}
