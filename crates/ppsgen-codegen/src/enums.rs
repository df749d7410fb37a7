//! Enumeration discovery and rendering
//!
//! Enums are declared inline at each type occurrence, so the same
//! definition can be reached through several methods or buried inside a
//! delegate prototype. The collector walks the whole manifest once, in a
//! fixed left-to-right top-to-bottom order, and renders each distinct enum
//! name exactly once, at its first discovery. The seen-set is local to one
//! `collect_enums` call; nothing leaks across compilations.

use crate::errors::CodegenError;
use crate::naming;
use crate::types::MAX_DELEGATE_DEPTH;
use ppsgen_manifest::{EnumDef, Method, PluginManifest, TypeDesc};
use std::collections::HashMap;

/// Walk the manifest and render every distinct enum definition, in
/// first-discovery order
pub fn collect_enums(manifest: &PluginManifest) -> Result<Vec<String>, CodegenError> {
    let mut seen: HashMap<String, EnumDef> = HashMap::new();
    let mut blocks = Vec::new();
    for method in &manifest.methods {
        let location = format!("method '{}'", method.name);
        collect_method(method, &location, 0, &mut seen, &mut blocks)?;
    }
    Ok(blocks)
}

fn collect_method(
    method: &Method,
    location: &str,
    depth: usize,
    seen: &mut HashMap<String, EnumDef>,
    blocks: &mut Vec<String>,
) -> Result<(), CodegenError> {
    for (index, param) in method.param_types.iter().enumerate() {
        let param_location = format!("{location}, parameter {index}");
        collect_type(&param.ty, &param_location, depth, seen, blocks)?;
    }
    let ret_location = format!("{location} return");
    collect_type(&method.ret_type.ty, &ret_location, depth, seen, blocks)
}

fn collect_type(
    ty: &TypeDesc,
    location: &str,
    depth: usize,
    seen: &mut HashMap<String, EnumDef>,
    blocks: &mut Vec<String>,
) -> Result<(), CodegenError> {
    if depth > MAX_DELEGATE_DEPTH {
        return Err(CodegenError::DelegateDepthExceeded {
            location: location.to_string(),
        });
    }

    if let Some(enum_def) = &ty.enum_def {
        match seen.get(&enum_def.name) {
            None => {
                blocks.push(render_enum(enum_def));
                seen.insert(enum_def.name.clone(), enum_def.clone());
            }
            Some(first) if first == enum_def => {}
            Some(_) => {
                // Same name reached twice with differing contents; neither
                // definition can be silently preferred
                return Err(CodegenError::EnumRedefinition {
                    name: enum_def.name.clone(),
                });
            }
        }
    }

    if let Some(proto) = &ty.prototype {
        let nested = format!("{location}, prototype '{}'", proto.name);
        collect_method(proto, &nested, depth + 1, seen, blocks)?;
    }
    Ok(())
}

/// Render one enum as an `IntEnum` class block
fn render_enum(enum_def: &EnumDef) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "class {}(IntEnum):\n",
        naming::sanitize(&enum_def.name)
    ));
    out.push_str(&format!(
        "    \"\"\"{}\"\"\"\n",
        enum_def
            .description
            .as_deref()
            .unwrap_or("No description provided.")
    ));
    if enum_def.values.is_empty() {
        out.push_str("    pass\n");
        return out;
    }
    for value in &enum_def.values {
        if let Some(desc) = &value.description {
            out.push_str(&format!("    # {desc}\n"));
        }
        out.push_str(&format!(
            "    {} = {}\n",
            naming::sanitize(&value.name),
            value.value
        ));
    }
    out
}
