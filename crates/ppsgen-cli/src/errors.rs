//! Centralized error types for the ppsgen CLI
//!
//! Every failure category maps to exit code 1 with a single
//! human-readable line on stdout; a failed run never leaves a partial
//! artifact behind.

use ppsgen_codegen::CodegenError;
use ppsgen_manifest::ManifestError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during one stub generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Manifest file does not exist: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("Output file already exists: {}. Use --override to overwrite existing file.", .0.display())]
    OutputExists(PathBuf),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
