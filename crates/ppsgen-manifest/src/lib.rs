//! Plugin manifest data model for the ppsgen stub compiler
//!
//! A `.pplugin` manifest is a JSON document describing a plugin's exported
//! methods: parameter and return types, optional enumerations, and optional
//! nested callback prototypes. This crate parses the raw JSON into the
//! strongly-typed model and validates it up front, so that code generation
//! never fails deep inside a nested render call.

pub mod errors;
pub mod manifest;
pub mod types;

pub use errors::ManifestError;
pub use types::{EnumDef, EnumValue, Method, Parameter, PluginManifest, ReturnType, TypeDesc};
