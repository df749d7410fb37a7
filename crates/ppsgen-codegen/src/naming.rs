//! Identifier sanitization for the Python target
//!
//! Raw manifest names can collide with Python keywords; a colliding name
//! gets a trailing underscore, the same escape used everywhere a name is
//! echoed back as an identifier (signatures, enum members, docstrings).

use once_cell::sync::Lazy;
use ppsgen_manifest::Parameter;
use std::borrow::Cow;
use std::collections::HashSet;

/// Python 3 keyword list (`keyword.kwlist`)
static PYTHON_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ]
    .into_iter()
    .collect()
});

/// Escape a raw name into a valid Python identifier
pub fn sanitize(name: &str) -> Cow<'_, str> {
    if PYTHON_KEYWORDS.contains(name) {
        Cow::Owned(format!("{name}_"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Resolve a parameter's declared name, synthesizing `p<index>` when the
/// manifest left it out, then sanitize
pub fn param_name(param: &Parameter, index: usize) -> String {
    match param.name.as_deref() {
        Some(name) if !name.is_empty() => sanitize(name).into_owned(),
        _ => format!("p{index}"),
    }
}
