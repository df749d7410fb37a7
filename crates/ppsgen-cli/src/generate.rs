//! Stub generation pipeline and write policy
//!
//! One blocking read, one in-memory transformation, one blocking write.
//! The exists-check and the write are not atomic; two simultaneous runs
//! against the same output path must be serialized by the caller.

use crate::errors::GenerateError;
use crate::logger;
use ppsgen_codegen::generate_stub;
use ppsgen_manifest::PluginManifest;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of the output directory that receives generated stubs
const STUB_SUBDIR: &str = "pps";

/// Extension of generated stub artifacts
const STUB_EXTENSION: &str = "pyi";

/// Run one manifest-to-stub compilation, returning the artifact path
pub fn handle_generate(
    manifest_path: &Path,
    output_dir: &Path,
    override_existing: bool,
) -> Result<PathBuf, GenerateError> {
    if !manifest_path.is_file() {
        return Err(GenerateError::ManifestNotFound(manifest_path.to_path_buf()));
    }
    if !output_dir.is_dir() {
        return Err(GenerateError::OutputDirMissing(output_dir.to_path_buf()));
    }

    let plugin_name = plugin_name_from_manifest(manifest_path);
    let output_path = output_dir
        .join(STUB_SUBDIR)
        .join(format!("{plugin_name}.{STUB_EXTENSION}"));

    if output_path.is_file() && !override_existing {
        return Err(GenerateError::OutputExists(output_path));
    }

    logger::debug(&format!("Loading manifest: {}", manifest_path.display()));
    let manifest = PluginManifest::load_from_path(manifest_path)?;
    logger::debug(&format!(
        "Manifest '{}' with {} exported methods",
        manifest.name,
        manifest.methods.len()
    ));

    let content = generate_stub(&plugin_name, &manifest)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, content)?;
    logger::info(&format!("Stub written: {}", output_path.display()));

    Ok(output_path)
}

/// Plugin name is the manifest file stem (`plugin.pplugin` -> `plugin`)
fn plugin_name_from_manifest(manifest_path: &Path) -> String {
    manifest_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_MANIFEST: &str = r#"{
        "name": "sample",
        "exportedMethods": [{
            "name": "add",
            "paramTypes": [
                {"name": "a", "type": "int32"},
                {"name": "b", "type": "int32"}
            ],
            "retType": {"type": "int32"}
        }]
    }"#;

    fn write_manifest(dir: &Path) -> PathBuf {
        let path = dir.join("sample.pplugin");
        fs::write(&path, SAMPLE_MANIFEST).unwrap();
        path
    }

    #[test]
    fn test_plugin_name_from_manifest() {
        assert_eq!(
            plugin_name_from_manifest(Path::new("/a/b/my_plugin.pplugin")),
            "my_plugin"
        );
        assert_eq!(plugin_name_from_manifest(Path::new("bare")), "bare");
    }

    #[test]
    fn test_happy_path_writes_under_pps() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path());

        let output = handle_generate(&manifest, dir.path(), false).unwrap();
        assert_eq!(output, dir.path().join("pps").join("sample.pyi"));
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("def add(a: int, b: int) -> int:"));
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            handle_generate(&dir.path().join("nope.pplugin"), dir.path(), false).unwrap_err();
        assert!(matches!(err, GenerateError::ManifestNotFound(_)));
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path());
        let err =
            handle_generate(&manifest, &dir.path().join("missing"), false).unwrap_err();
        assert!(matches!(err, GenerateError::OutputDirMissing(_)));
    }

    #[test]
    fn test_existing_output_without_override() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path());

        let output = handle_generate(&manifest, dir.path(), false).unwrap();
        fs::write(&output, "sentinel").unwrap();

        let err = handle_generate(&manifest, dir.path(), false).unwrap_err();
        assert!(matches!(err, GenerateError::OutputExists(_)));
        // The existing artifact must be left untouched
        assert_eq!(fs::read_to_string(&output).unwrap(), "sentinel");
    }

    #[test]
    fn test_override_regenerates_identically() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path());

        let output = handle_generate(&manifest, dir.path(), false).unwrap();
        let first = fs::read_to_string(&output).unwrap();
        handle_generate(&manifest, dir.path(), true).unwrap();
        let second = fs::read_to_string(&output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_compilation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("bad.pplugin");
        fs::write(
            &manifest,
            r#"{"name": "bad", "exportedMethods": [{
                "name": "draw",
                "paramTypes": [{"name": "w", "type": "widget"}]
            }]}"#,
        )
        .unwrap();

        let err = handle_generate(&manifest, dir.path(), false).unwrap_err();
        assert!(matches!(err, GenerateError::Codegen(_)));
        assert!(!dir.path().join("pps").join("bad.pyi").exists());
    }
}
