//! Type resolution: canonical manifest tags to Python type expressions
//!
//! The vocabulary is fixed; an unknown tag is a hard failure, never a
//! silent default. Array forms (`tag[]`) are derived from the element
//! mapping so the two can never drift apart.

use crate::errors::CodegenError;
use crate::naming;
use crate::signature::{self, ParamMode};
use ppsgen_manifest::TypeDesc;

/// Hard bound on delegate prototype nesting. Callbacks describing
/// callbacks-of-callbacks are legal; unbounded recursion is not.
pub const MAX_DELEGATE_DEPTH: usize = 32;

/// Fixed scalar tag mapping. `function` is handled separately because it
/// carries an optional recursive prototype.
fn scalar_type(tag: &str) -> Option<&'static str> {
    match tag {
        "void" => Some("None"),
        "bool" => Some("bool"),
        "char8" | "char16" | "string" => Some("str"),
        "int8" | "int16" | "int32" | "int64" => Some("int"),
        "uint8" | "uint16" | "uint32" | "uint64" | "ptr64" => Some("int"),
        "float" | "double" => Some("float"),
        "any" => Some("object"),
        "vec2" => Some("Vector2"),
        "vec3" => Some("Vector3"),
        "vec4" => Some("Vector4"),
        "mat4x4" => Some("Matrix4x4"),
        _ => None,
    }
}

/// Resolve one type occurrence to its Python expression
///
/// `location` is human-readable context ("method 'x', parameter 1") used
/// in error messages; `depth` tracks delegate nesting.
pub fn resolve_type(ty: &TypeDesc, location: &str, depth: usize) -> Result<String, CodegenError> {
    if depth > MAX_DELEGATE_DEPTH {
        return Err(CodegenError::DelegateDepthExceeded {
            location: location.to_string(),
        });
    }

    let element = ty.element_tag();

    // An enumeration-backed integer resolves to the enum's own name. The
    // underlying tag must still be in the table so enum-backed and plain
    // occurrences of a tag stay in lock-step.
    if let Some(enum_def) = &ty.enum_def {
        if scalar_type(element).is_none() {
            return Err(unresolved(ty, location));
        }
        let name = naming::sanitize(&enum_def.name);
        return Ok(wrap_array(ty, &name));
    }

    if element == "function" {
        let expr = resolve_delegate(ty, location, depth)?;
        return Ok(wrap_array(ty, &expr));
    }

    match scalar_type(element) {
        Some(expr) => Ok(wrap_array(ty, expr)),
        None => Err(unresolved(ty, location)),
    }
}

/// Render a function-typed occurrence: a full `Callable[[...], ...]`
/// expression when a prototype is present, the generic form otherwise
fn resolve_delegate(ty: &TypeDesc, location: &str, depth: usize) -> Result<String, CodegenError> {
    match &ty.prototype {
        Some(proto) => {
            let nested = format!("{location}, prototype '{}'", proto.name);
            let params =
                signature::build_params(&proto.param_types, ParamMode::Types, &nested, depth + 1)?;
            let ret = resolve_type(&proto.ret_type.ty, &nested, depth + 1)?;
            Ok(format!("Callable[[{params}], {ret}]"))
        }
        None => Ok("Callable[..., Any]".to_string()),
    }
}

fn wrap_array(ty: &TypeDesc, element_expr: &str) -> String {
    if ty.is_array() {
        format!("list[{element_expr}]")
    } else {
        element_expr.to_string()
    }
}

fn unresolved(ty: &TypeDesc, location: &str) -> CodegenError {
    CodegenError::UnresolvedType {
        tag: ty.tag.clone(),
        location: location.to_string(),
    }
}
