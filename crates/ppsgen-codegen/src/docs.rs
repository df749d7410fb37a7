//! Structured docstring synthesis
//!
//! Docstrings echo the raw manifest type tags (int32, string[]) rather
//! than the resolved Python expressions; the raw vocabulary is what plugin
//! authors wrote and what the reader should see. Callback prototypes get
//! their own nested block per occurrence, recursively; unlike enum
//! collection this is deliberately not deduplicated.

use crate::naming;
use ppsgen_manifest::Method;

const NO_DESCRIPTION: &str = "No description provided.";
const NO_DETAIL: &str = "No description available.";

/// Render the docstring block for one method declaration
pub fn document(method: &Method) -> String {
    let mut doc = String::new();
    doc.push_str("    \"\"\"\n");
    doc.push_str(&format!(
        "    {}\n",
        method.description.as_deref().unwrap_or(NO_DESCRIPTION)
    ));
    doc.push_str("    Args:\n");
    for (index, param) in method.param_types.iter().enumerate() {
        doc.push_str(&format!(
            "        {} ({}): {}\n",
            naming::param_name(param, index),
            tag_text(&param.ty.tag),
            param.description.as_deref().unwrap_or(NO_DETAIL)
        ));
    }

    if !method.ret_type.ty.tag.eq_ignore_ascii_case("void") {
        doc.push_str(&format!(
            "\n    Returns:\n        {}: {}\n",
            tag_text(&method.ret_type.ty.tag),
            method.ret_type.description.as_deref().unwrap_or(NO_DETAIL)
        ));
    }

    for param in &method.param_types {
        if param.ty.element_tag() == "function" {
            if let Some(proto) = &param.ty.prototype {
                doc.push_str(&callback_block(proto, 1));
            }
        }
    }

    doc.push_str("    \"\"\"");
    doc
}

/// Render one nested callback prototype block at the given indent level
fn callback_block(proto: &Method, level: usize) -> String {
    let ind = "    ".repeat(level);
    let mut block = String::new();

    block.push_str(&format!(
        "\n{ind}Callback Prototype ({}):\n{ind}    {}\n\n",
        proto.name,
        proto.description.as_deref().unwrap_or(NO_DESCRIPTION)
    ));

    block.push_str(&format!("{ind}    Args:\n"));
    for (index, param) in proto.param_types.iter().enumerate() {
        block.push_str(&format!(
            "{ind}        {} ({}): {}\n",
            naming::param_name(param, index),
            tag_text(&param.ty.tag),
            param.description.as_deref().unwrap_or(NO_DETAIL)
        ));
    }

    if !proto.ret_type.ty.tag.eq_ignore_ascii_case("void") {
        block.push_str(&format!(
            "\n{ind}    Returns:\n{ind}        {}: {}\n",
            tag_text(&proto.ret_type.ty.tag),
            proto.ret_type.description.as_deref().unwrap_or(NO_DETAIL)
        ));
    }

    // A callback can itself take callbacks; document those one level deeper
    for param in &proto.param_types {
        if param.ty.element_tag() == "function" {
            if let Some(inner) = &param.ty.prototype {
                block.push_str(&callback_block(inner, level + 1));
            }
        }
    }

    block
}

fn tag_text(tag: &str) -> &str {
    if tag.is_empty() {
        "Any"
    } else {
        tag
    }
}
