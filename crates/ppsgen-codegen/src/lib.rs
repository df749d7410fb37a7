//! Manifest-to-stub compiler core
//!
//! Transforms a validated [`ppsgen_manifest::PluginManifest`] into one
//! Python `.pyi` stub artifact: header imports, enum definitions, and a
//! declaration plus docstring per exported method. The transformation is a
//! single pure pass over the manifest; given identical input the output is
//! byte-for-byte identical.

pub mod docs;
pub mod emitter;
pub mod enums;
pub mod errors;
pub mod naming;
pub mod returns;
pub mod signature;
pub mod types;

pub use emitter::generate_stub;
pub use errors::CodegenError;
