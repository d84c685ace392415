//! Tests that generated files land on disk where the manifest says.

mod common;

use common::{TOOLKIT, build, manifest};
use jsxgen_codegen_typescript::{DEBUG_DIR, GenerateOptions, Generator};
use tempfile::TempDir;

#[test]
fn test_generate_writes_both_dialects() {
    let manifest = manifest(TOOLKIT);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&manifest)
        .generate(temp_dir.path())
        .expect("Failed to generate");

    assert_eq!(result.stats.written, 2);
    let ambient = temp_dir
        .path()
        .join("svelte-native-defs/svelte-native-jsx-demo.d.ts");
    let exported = temp_dir
        .path()
        .join("react-nativescript-defs/react-nativescript-jsx-demo.ts");
    assert!(ambient.exists());
    assert!(exported.exists());

    let content = std::fs::read_to_string(&ambient).unwrap();
    assert!(content.contains("declare namespace JSX"));
    // Nothing to warn about: the exclusion matched and the scaffold class is a view
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_generate_overwrites_existing_files() {
    let manifest = manifest(TOOLKIT);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let ambient = temp_dir
        .path()
        .join("svelte-native-defs/svelte-native-jsx-demo.d.ts");
    std::fs::create_dir_all(ambient.parent().unwrap()).unwrap();
    std::fs::write(&ambient, "stale").unwrap();

    Generator::new(&manifest)
        .generate(temp_dir.path())
        .expect("Failed to generate");

    let content = std::fs::read_to_string(&ambient).unwrap();
    assert_ne!(content, "stale");
}

#[test]
fn test_dump_writes_document_json() {
    let manifest = manifest(TOOLKIT);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&manifest)
        .with_options(GenerateOptions {
            dump: true,
            ..Default::default()
        })
        .generate(temp_dir.path())
        .expect("Failed to generate");
    assert_eq!(result.stats.written, 3);

    let dump = temp_dir.path().join(DEBUG_DIR).join("demo.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dump).unwrap()).unwrap();

    let classes = json["class_definitions"].as_array().unwrap();
    assert_eq!(classes.len(), 3);
    assert_eq!(classes[2]["class_name"], "ViewAttributes");
    assert_eq!(
        classes[2]["properties"]["color"]["type"],
        "string | Color"
    );
    assert_eq!(json["intrinsic_elements"][0]["tag_name"], "button");
}

#[test]
fn test_preview_writes_nothing() {
    let manifest = manifest(TOOLKIT);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let files = Generator::new(&manifest).preview().expect("Failed to preview");

    assert_eq!(files.len(), 2);
    assert!(std::fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn test_failed_export_aborts_generation() {
    let manifest = manifest(
        r#"
[project]
name = "demo"

[[exports]]
name = "broken"
roots = ["Broken"]

[classes.Broken]
module = "m/broken"
extends = "Missing"
"#,
    );
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let err = Generator::new(&manifest)
        .generate(temp_dir.path())
        .unwrap_err();

    assert!(err.to_string().contains("failed to build export 'broken'"));
    assert!(std::fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn test_build_keeps_full_document_for_ambient_dialect() {
    let manifest = manifest(TOOLKIT);
    let build = build(&manifest, "demo");

    assert!(
        build
            .ambient
            .class("ViewAttributes")
            .unwrap()
            .property("style")
            .is_some()
    );
    assert!(
        build
            .exported
            .class("ViewAttributes")
            .unwrap()
            .property("style")
            .is_none()
    );
}
