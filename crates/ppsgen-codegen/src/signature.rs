//! Parameter list rendering for method declarations and delegate types

use crate::errors::CodegenError;
use crate::naming;
use crate::types::resolve_type;
use ppsgen_manifest::Parameter;

/// How a parameter list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    /// Comma-joined resolved types, used inside `Callable[[...], ...]`
    Types,
    /// Comma-joined `name: type` pairs, used in `def` declarations
    TypesNames,
}

/// Render an ordered parameter list. Order is preserved exactly as
/// declared; the host call trampoline binds positionally, so reordering
/// here would change call semantics. An empty list yields an empty string.
pub fn build_params(
    params: &[Parameter],
    mode: ParamMode,
    location: &str,
    depth: usize,
) -> Result<String, CodegenError> {
    let mut parts = Vec::with_capacity(params.len());
    for (index, param) in params.iter().enumerate() {
        let param_location = format!("{location}, parameter {index}");
        let resolved = resolve_type(&param.ty, &param_location, depth)?;
        parts.push(match mode {
            ParamMode::Types => resolved,
            ParamMode::TypesNames => {
                format!("{}: {}", naming::param_name(param, index), resolved)
            }
        });
    }
    Ok(parts.join(", "))
}
