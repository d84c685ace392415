//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::str::FromStr;

use jsxgen_codegen_typescript::{ExportBuild, GenerateOptions, Generator};
use jsxgen_manifest::Manifest;

/// A small widget toolkit: two widgets sharing a base view.
pub const TOOLKIT: &str = r#"
[project]
name = "demo"

[[exports]]
name = "demo"
roots = ["Label", "Button"]
exclude = ["ViewAttributes.style"]
scaffold = { package = "demo-ui", export = "Button" }

[classes.View]
module = "@ui/core/view"
[classes.View.members]
color = "string | Color"
style = "Style"
onTap = "(args: EventData) => void"
_private = "number"
nativeView = { type = "any", visibility = "protected" }
count = { type = "number", static = true }

[classes.Label]
module = "@ui/label"
extends = "View"
[classes.Label.members]
text = "string"

[classes.Button]
module = "@ui/button"
extends = "View"

[types.Color]
module = "@ui/color"
kind = "class"

[types.Style]
module = "@ui/styling/style"
kind = "class"

[types.EventData]
module = "@ui/observable"
kind = "interface"
"#;

pub fn manifest(toml: &str) -> Manifest {
    Manifest::from_str(toml).expect("Failed to parse manifest")
}

/// Render every file of the selected exports, keyed by path.
pub fn render(manifest: &Manifest, options: GenerateOptions) -> Vec<(String, String)> {
    Generator::new(manifest)
        .with_options(options)
        .preview()
        .expect("Generation failed")
        .into_iter()
        .map(|p| (p.path, p.content))
        .collect()
}

pub fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("file not generated: {}", path))
}

pub fn build(manifest: &Manifest, export: &str) -> ExportBuild {
    let generator = Generator::new(manifest);
    let export = manifest.export(export).expect("unknown export");
    generator.build_export(export).expect("Build failed")
}
