//! Typed model of the `.pplugin` manifest schema
//!
//! The model targets the most capable schema variant: enumerations,
//! array-of-enum, reference (output) parameters, and recursive delegate
//! prototypes are all representable. Older manifests that use none of
//! these still deserialize cleanly through serde defaults.

use serde::Deserialize;

/// Top-level plugin manifest: a name plus the ordered exported methods
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PluginManifest {
    #[serde(default)]
    pub name: String,
    /// Ordered list of exported methods. Newer manifests use
    /// `exportedMethods`; older revisions used `methods`.
    #[serde(rename = "exportedMethods", alias = "methods", default)]
    pub methods: Vec<Method>,
}

/// One method signature, used both for top-level exports and, boxed,
/// for delegate prototypes nested inside a [`TypeDesc`]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Method {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "paramTypes", default)]
    pub param_types: Vec<Parameter>,
    #[serde(rename = "retType", default)]
    pub ret_type: ReturnType,
}

/// One parameter in a method's ordered parameter list
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Parameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Output/in-out parameter. Reference parameters are produced by the
    /// callee and widen the logical return shape to a tuple.
    #[serde(rename = "ref", default)]
    pub is_ref: bool,
    #[serde(flatten)]
    pub ty: TypeDesc,
}

/// Declared return type of a method
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReturnType {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub ty: TypeDesc,
}

impl Default for ReturnType {
    fn default() -> Self {
        ReturnType {
            description: None,
            ty: TypeDesc {
                tag: "void".to_string(),
                enum_def: None,
                prototype: None,
            },
        }
    }
}

/// One type occurrence: a canonical tag plus the optional enum backing
/// and the optional delegate prototype
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TypeDesc {
    #[serde(rename = "type", default)]
    pub tag: String,
    /// Present only when the tag denotes an enumeration-backed integer
    #[serde(rename = "enum", default)]
    pub enum_def: Option<EnumDef>,
    /// Present only when the tag is `function` (or `function[]`); carries
    /// the callback's full signature, recursively
    #[serde(default)]
    pub prototype: Option<Box<Method>>,
}

impl TypeDesc {
    /// Whether the tag is the array form (`tag[]`) of some element type
    pub fn is_array(&self) -> bool {
        self.tag.ends_with("[]")
    }

    /// Element tag for array types, the tag itself otherwise
    pub fn element_tag(&self) -> &str {
        self.tag.strip_suffix("[]").unwrap_or(&self.tag)
    }
}

/// Enumeration definition carried inline by a type occurrence
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnumDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// One `name = value` entry of an enumeration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnumValue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub description: Option<String>,
}
