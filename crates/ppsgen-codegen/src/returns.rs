//! Logical return shape composition
//!
//! The host call convention returns every reference (output) parameter
//! alongside the nominal result: a call with k reference parameters
//! produces a (k+1)-tuple. The declared stub return shape must match that
//! arity exactly, because the trampoline binds by position and arity, not
//! by name.

use crate::errors::CodegenError;
use crate::types::resolve_type;
use ppsgen_manifest::{Parameter, ReturnType};

/// Compose the declared return expression for a method
///
/// No reference parameters: the resolved return type itself. Otherwise a
/// `tuple[...]` of the return type followed by each reference parameter's
/// type in original declaration order.
pub fn compose_return(
    ret: &ReturnType,
    params: &[Parameter],
    location: &str,
) -> Result<String, CodegenError> {
    let ret_expr = resolve_type(&ret.ty, &format!("{location} return"), 0)?;

    let mut ref_exprs = Vec::new();
    for (index, param) in params.iter().enumerate() {
        if param.is_ref {
            let param_location = format!("{location}, parameter {index}");
            ref_exprs.push(resolve_type(&param.ty, &param_location, 0)?);
        }
    }

    if ref_exprs.is_empty() {
        Ok(ret_expr)
    } else {
        Ok(format!("tuple[{ret_expr}, {}]", ref_exprs.join(", ")))
    }
}
