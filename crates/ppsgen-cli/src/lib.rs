//! ppsgen library - expose modules for testing
//!
//! The CLI surface lives in `main.rs`; the write-policy and generation
//! pipeline live here so integration tests can exercise them directly.

pub mod errors;
pub mod generate;

pub use ppsgen_logger as logger;
