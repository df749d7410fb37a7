//! Manifest loading and up-front schema validation
//!
//! Loading is a single blocking read followed by one serde pass. Validation
//! walks the whole tree (including nested delegate prototypes) and surfaces
//! every structural fault with enough context to locate it, before any code
//! generation begins.

use crate::errors::ManifestError;
use crate::types::{Method, PluginManifest, TypeDesc};
use std::path::Path;

impl PluginManifest {
    /// Load and validate a manifest from a `.pplugin` JSON file
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a manifest from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        let manifest: PluginManifest = serde_json::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check structural invariants the serde pass cannot express
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (index, method) in self.methods.iter().enumerate() {
            if method.name.is_empty() {
                return Err(ManifestError::MissingMethodName { index });
            }
            validate_method(method, &format!("method '{}'", method.name))?;
        }
        Ok(())
    }
}

fn validate_method(method: &Method, location: &str) -> Result<(), ManifestError> {
    for (index, param) in method.param_types.iter().enumerate() {
        let param_location = format!("{location}, parameter {index}");
        validate_type(&param.ty, &param_location)?;
    }
    validate_type(&method.ret_type.ty, &format!("{location} return"))
}

fn validate_type(ty: &TypeDesc, location: &str) -> Result<(), ManifestError> {
    if let Some(enum_def) = &ty.enum_def {
        if enum_def.name.is_empty() {
            return Err(ManifestError::EmptyEnumName {
                location: location.to_string(),
            });
        }
    }
    if let Some(prototype) = &ty.prototype {
        if ty.element_tag() != "function" {
            return Err(ManifestError::StrayPrototype {
                tag: ty.tag.clone(),
                location: location.to_string(),
            });
        }
        // Nesting depth is bounded by the JSON parser's own recursion limit
        let nested = format!("{location}, prototype '{}'", prototype.name);
        validate_method(prototype, &nested)?;
    }
    Ok(())
}
