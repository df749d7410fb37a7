//! Stub artifact assembly
//!
//! One linear pass: header imports, enum section (omitted when empty),
//! then a declaration, docstring, and `...` placeholder per exported
//! method, in manifest order. The header carries no timestamps and every
//! import is justified by the body, so output is byte-deterministic and
//! diff-stable.

use crate::docs;
use crate::enums::collect_enums;
use crate::errors::CodegenError;
use crate::naming;
use crate::returns::compose_return;
use crate::signature::{build_params, ParamMode};
use ppsgen_manifest::{Method, PluginManifest, TypeDesc};

const GENERATOR_LINK: &str = "https://github.com/untrustedmodders/ppsgen";

/// Compile a validated manifest into the complete `.pyi` artifact text
pub fn generate_stub(
    plugin_name: &str,
    manifest: &PluginManifest,
) -> Result<String, CodegenError> {
    // Enum collection first: it owns the depth cap for degenerate
    // prototype nesting, so the scans below walk bounded input
    let enum_blocks = collect_enums(manifest)?;

    let mut body = String::new();
    for method in &manifest.methods {
        let location = format!("method '{}'", method.name);
        let params = build_params(&method.param_types, ParamMode::TypesNames, &location, 0)?;
        let ret = compose_return(&method.ret_type, &method.param_types, &location)?;
        let doc = docs::document(method);
        body.push_str(&format!(
            "def {}({params}) -> {ret}:\n{doc}\n    ...\n\n\n",
            naming::sanitize(&method.name)
        ));
    }

    let mut out = render_header(plugin_name, manifest, !enum_blocks.is_empty());
    for block in &enum_blocks {
        out.push_str(block);
        out.push_str("\n\n");
    }
    out.push_str(&body);
    Ok(out)
}

/// Which header imports the manifest actually exercises
#[derive(Debug, Default, PartialEq, Eq)]
struct Imports {
    callable: bool,
    any: bool,
    vec2: bool,
    vec3: bool,
    vec4: bool,
    mat4x4: bool,
}

fn render_header(plugin_name: &str, manifest: &PluginManifest, has_enums: bool) -> String {
    let imports = scan_imports(manifest);
    let mut header = String::new();

    if imports.callable || imports.any {
        let mut items = Vec::new();
        if imports.any {
            items.push("Any");
        }
        if imports.callable {
            items.push("Callable");
        }
        header.push_str(&format!("from typing import {}\n", items.join(", ")));
    }
    if has_enums {
        header.push_str("from enum import IntEnum\n");
    }
    let pods: Vec<&str> = [
        (imports.vec2, "Vector2"),
        (imports.vec3, "Vector3"),
        (imports.vec4, "Vector4"),
        (imports.mat4x4, "Matrix4x4"),
    ]
    .iter()
    .filter_map(|&(used, name)| used.then_some(name))
    .collect();
    if !pods.is_empty() {
        header.push_str(&format!("from plugify.plugin import {}\n", pods.join(", ")));
    }

    if !header.is_empty() {
        header.push('\n');
    }
    header.push_str(&format!(
        "# Generated from {plugin_name}.pplugin by {GENERATOR_LINK}\n\n"
    ));
    header
}

fn scan_imports(manifest: &PluginManifest) -> Imports {
    let mut imports = Imports::default();
    for method in &manifest.methods {
        scan_method(method, &mut imports);
    }
    imports
}

fn scan_method(method: &Method, imports: &mut Imports) {
    for param in &method.param_types {
        scan_type(&param.ty, imports);
    }
    scan_type(&method.ret_type.ty, imports);
}

fn scan_type(ty: &TypeDesc, imports: &mut Imports) {
    // Enum-backed occurrences resolve to the enum name; the underlying
    // integer tag pulls in nothing
    if ty.enum_def.is_none() {
        match ty.element_tag() {
            "function" => {
                imports.callable = true;
                if ty.prototype.is_none() {
                    imports.any = true;
                }
            }
            "vec2" => imports.vec2 = true,
            "vec3" => imports.vec3 = true,
            "vec4" => imports.vec4 = true,
            "mat4x4" => imports.mat4x4 = true,
            _ => {}
        }
    }
    if let Some(proto) = &ty.prototype {
        scan_method(proto, imports);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> PluginManifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_add_method_artifact() {
        let m = manifest(
            r#"{"name": "math", "exportedMethods": [{
                "name": "add",
                "description": "Adds two integers.",
                "paramTypes": [
                    {"name": "a", "type": "int32"},
                    {"name": "b", "type": "int32"}
                ],
                "retType": {"type": "int32"}
            }]}"#,
        );
        let stub = generate_stub("math", &m).unwrap();
        assert!(stub.starts_with("# Generated from math.pplugin by"));
        assert!(stub.contains("def add(a: int, b: int) -> int:"));
        assert!(stub.contains("        a (int32): No description available.\n"));
        assert!(stub.contains("\n    Returns:\n        int32:"));
        assert!(stub.contains("\n    ...\n"));
    }

    #[test]
    fn test_ref_params_widen_return() {
        let m = manifest(
            r#"{"name": "p", "exportedMethods": [{
                "name": "split",
                "paramTypes": [
                    {"name": "s", "type": "string"},
                    {"name": "out1", "type": "int32", "ref": true}
                ],
                "retType": {"type": "bool"}
            }]}"#,
        );
        let stub = generate_stub("p", &m).unwrap();
        assert!(stub.contains("def split(s: str, out1: int) -> tuple[bool, int]:"));
    }

    #[test]
    fn test_unused_imports_omitted() {
        let m = manifest(
            r#"{"name": "p", "exportedMethods": [{
                "name": "add",
                "paramTypes": [{"name": "a", "type": "int32"}],
                "retType": {"type": "int32"}
            }]}"#,
        );
        let stub = generate_stub("p", &m).unwrap();
        assert!(!stub.contains("from typing import"));
        assert!(!stub.contains("from enum import"));
        assert!(!stub.contains("from plugify.plugin import"));
        assert!(stub.starts_with("# Generated from"));
    }

    #[test]
    fn test_callable_import_with_prototype_only() {
        let m = manifest(
            r#"{"name": "p", "exportedMethods": [{
                "name": "subscribe",
                "paramTypes": [{
                    "name": "cb", "type": "function",
                    "prototype": {"name": "OnEvent",
                        "paramTypes": [{"name": "x", "type": "int32"}]}
                }]
            }]}"#,
        );
        let stub = generate_stub("p", &m).unwrap();
        // Fully-typed delegate never references Any
        assert!(stub.contains("from typing import Callable\n"));
        assert!(!stub.contains("Any"));
        assert!(stub.contains("def subscribe(cb: Callable[[int], None]) -> None:"));
    }

    #[test]
    fn test_untyped_function_pulls_any() {
        let m = manifest(
            r#"{"name": "p", "exportedMethods": [{
                "name": "hook",
                "paramTypes": [{"name": "f", "type": "function"}]
            }]}"#,
        );
        let stub = generate_stub("p", &m).unwrap();
        assert!(stub.contains("from typing import Any, Callable\n"));
        assert!(stub.contains("def hook(f: Callable[..., Any]) -> None:"));
    }

    #[test]
    fn test_only_used_pod_types_imported() {
        let m = manifest(
            r#"{"name": "p", "exportedMethods": [{
                "name": "norm",
                "paramTypes": [{"name": "v", "type": "vec3"}],
                "retType": {"type": "vec3"}
            }, {
                "name": "project",
                "paramTypes": [{"name": "m", "type": "mat4x4"}],
                "retType": {"type": "vec4"}
            }]}"#,
        );
        let stub = generate_stub("p", &m).unwrap();
        assert!(stub.contains("from plugify.plugin import Vector3, Vector4, Matrix4x4\n"));
        assert!(!stub.contains("Vector2"));
    }

    #[test]
    fn test_enum_section_and_import() {
        let m = manifest(
            r#"{"name": "p", "exportedMethods": [{
                "name": "pick",
                "paramTypes": [{
                    "name": "c", "type": "int32",
                    "enum": {"name": "Color", "description": "Basic colors.",
                             "values": [{"name": "Red", "value": 1}]}
                }],
                "retType": {"type": "int32",
                    "enum": {"name": "Color", "description": "Basic colors.",
                             "values": [{"name": "Red", "value": 1}]}}
            }]}"#,
        );
        let stub = generate_stub("p", &m).unwrap();
        assert!(stub.contains("from enum import IntEnum\n"));
        assert_eq!(stub.matches("class Color(IntEnum):").count(), 1);
        assert!(stub.contains("def pick(c: Color) -> Color:"));
    }

    #[test]
    fn test_unknown_tag_fails_whole_compilation() {
        let m = manifest(
            r#"{"name": "p", "exportedMethods": [{
                "name": "draw",
                "paramTypes": [{"name": "w", "type": "widget"}]
            }]}"#,
        );
        let err = generate_stub("p", &m).unwrap_err();
        assert!(matches!(err, CodegenError::UnresolvedType { .. }));
    }

    #[test]
    fn test_output_is_deterministic() {
        let json = r#"{"name": "p", "exportedMethods": [{
            "name": "pick",
            "paramTypes": [{
                "name": "c", "type": "int32",
                "enum": {"name": "Color", "values": [{"name": "Red", "value": 1}]}
            }, {
                "name": "cb", "type": "function",
                "prototype": {"name": "OnPick",
                    "paramTypes": [{"name": "v", "type": "vec2"}]}
            }],
            "retType": {"type": "bool"}
        }]}"#;
        let first = generate_stub("p", &manifest(json)).unwrap();
        let second = generate_stub("p", &manifest(json)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_keyword_method_name_sanitized() {
        let m = manifest(r#"{"name": "p", "exportedMethods": [{"name": "import"}]}"#);
        let stub = generate_stub("p", &m).unwrap();
        assert!(stub.contains("def import_() -> None:"));
    }

    #[test]
    fn test_methods_rendered_in_manifest_order() {
        let m = manifest(
            r#"{"name": "p", "exportedMethods": [
                {"name": "zeta"}, {"name": "alpha"}, {"name": "mid"}
            ]}"#,
        );
        let stub = generate_stub("p", &m).unwrap();
        let zeta = stub.find("def zeta").unwrap();
        let alpha = stub.find("def alpha").unwrap();
        let mid = stub.find("def mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }
}
