//! Per-export declaration generator.

use std::path::Path;

use eyre::{Result, WrapErr, eyre};
use jsxgen_codegen::{
    BuildError, ClassGraphProvider, Diagnostic, DocumentBuilder, ManifestProvider, WrappingKind,
    generation::{FileEntry, FileRegistry, PreviewEntry, WriteStats},
};
use jsxgen_ir::Document;
use jsxgen_manifest::{ExportConfig, Manifest};
use log::{debug, info};

use crate::renderer::{AmbientRenderer, DeclarationRenderer, ExportedRenderer, RenderOptions};

/// Directory (relative to the output root) receiving document dumps.
pub const DEBUG_DIR: &str = ".jsxgen/debug";

/// Options controlling what gets generated.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Annotate properties with their provenance.
    pub debug: bool,
    /// Also write each assembled document as JSON.
    pub dump: bool,
    /// Restrict generation to a single export.
    pub only: Option<String>,
}

/// The documents built for one export.
#[derive(Debug, Clone)]
pub struct ExportBuild {
    pub name: String,
    /// Full document, rendered by the ambient dialect.
    pub ambient: Document,
    /// Document with the export's exclusions applied.
    pub exported: Document,
    /// Wrapping kind of the scaffold class, if a scaffold was requested.
    pub wrapping: Option<WrappingKind>,
    /// Registration scaffold appended to the exported file.
    pub scaffold: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of writing generated files.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub stats: WriteStats,
    pub diagnostics: Vec<Diagnostic>,
}

/// Declaration generator over a parsed manifest.
pub struct Generator<'m> {
    manifest: &'m Manifest,
    provider: ManifestProvider<'m>,
    options: GenerateOptions,
}

impl<'m> Generator<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            provider: ManifestProvider::new(manifest),
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn provider(&self) -> &ManifestProvider<'m> {
        &self.provider
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            debug: self.options.debug,
        }
    }

    /// Exports selected by the options.
    pub fn exports(&self) -> Result<Vec<&'m ExportConfig>> {
        match &self.options.only {
            Some(name) => self
                .manifest
                .export(name)
                .map(|e| vec![e])
                .ok_or_else(|| eyre!("unknown export '{}'", name)),
            None => Ok(self.manifest.exports.iter().collect()),
        }
    }

    /// Build the documents for one export.
    pub fn build_export(&self, export: &ExportConfig) -> std::result::Result<ExportBuild, BuildError> {
        info!(export:% = export.name, roots = export.roots.len(); "Building export");

        let ambient = DocumentBuilder::new(&self.provider).build_named(&export.roots)?;
        let mut diagnostics = Vec::new();

        let mut exported = ambient.clone();
        for exclusion in &export.exclude {
            if !exported.exclude_property(&exclusion.class_name, &exclusion.property) {
                diagnostics.push(
                    Diagnostic::warning(&export.name, "exclusion matched no property")
                        .at(exclusion.to_string()),
                );
            }
        }
        let pruned = exported.prune_imports();
        if pruned > 0 {
            debug!(export:% = export.name, pruned = pruned; "Pruned unreferenced imports");
        }

        let mut wrapping = None;
        let mut scaffold = None;
        if let Some(config) = &export.scaffold {
            let class = self
                .provider
                .lookup_class(&config.export)
                .ok_or_else(|| BuildError::UnknownRoot {
                    name: config.export.clone(),
                })?;
            let kind = WrappingKind::classify(&self.provider, &class, &self.manifest.toolkit)?;
            wrapping = Some(kind);
            scaffold = ExportedRenderer::new(self.render_options()).render_implementation(
                &config.package,
                &config.export,
                kind,
            );
            if scaffold.is_none() {
                diagnostics.push(
                    Diagnostic::warning(
                        &export.name,
                        "no registration scaffold: no toolkit base class in the ancestor chain",
                    )
                    .at(config.export.clone()),
                );
            }
        }

        Ok(ExportBuild {
            name: export.name.clone(),
            ambient,
            exported,
            wrapping,
            scaffold,
            diagnostics,
        })
    }

    /// Build every selected export, continuing past failures.
    pub fn build_all(&self) -> Result<Vec<(String, std::result::Result<ExportBuild, BuildError>)>> {
        Ok(self
            .exports()?
            .into_iter()
            .map(|export| (export.name.clone(), self.build_export(export)))
            .collect())
    }

    /// Render the files for one built export.
    pub fn files(&self, build: &ExportBuild) -> Result<Vec<FileEntry>> {
        let options = self.render_options();
        let output = &self.manifest.output;

        let ambient = AmbientRenderer::new(options).render(&build.ambient);
        let mut exported = ExportedRenderer::new(options).render(&build.exported);
        if let Some(scaffold) = &build.scaffold {
            exported.push('\n');
            exported.push_str(scaffold);
        }

        let mut files = vec![
            FileEntry::ambient(output.ambient_path(&build.name), ambient),
            FileEntry::exported(output.exported_path(&build.name), exported),
        ];

        if self.options.dump {
            let mut json = serde_json::to_string_pretty(&build.ambient)
                .wrap_err_with(|| format!("failed to serialize document for '{}'", build.name))?;
            json.push('\n');
            files.push(FileEntry::debug(
                format!("{}/{}.json", DEBUG_DIR, build.name),
                json,
            ));
        }

        Ok(files)
    }

    /// Build every selected export and register its files.
    ///
    /// Stops at the first export that fails to build.
    pub fn registry(&self) -> Result<(FileRegistry, Vec<Diagnostic>)> {
        let mut registry = FileRegistry::new();
        let mut diagnostics = Vec::new();

        for export in self.exports()? {
            let build = self
                .build_export(export)
                .wrap_err_with(|| format!("failed to build export '{}'", export.name))?;
            registry.register_all(self.files(&build)?);
            diagnostics.extend(build.diagnostics);
        }

        Ok((registry, diagnostics))
    }

    /// Preview generated files without writing to disk.
    pub fn preview(&self) -> Result<Vec<PreviewEntry>> {
        Ok(self.registry()?.0.preview())
    }

    /// Generate all files into the output directory.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (registry, diagnostics) = self.registry()?;
        let stats = registry.write_all(output_dir)?;
        info!(files = stats.written, dir:% = output_dir.display(); "Generated declarations");
        Ok(GenerateResult { stats, diagnostics })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MANIFEST: &str = r#"
[project]
name = "demo"

[[exports]]
name = "cards"
roots = ["Card"]
exclude = ["ViewAttributes.style", "CardAttributes.missing"]
scaffold = { package = "demo-cards", export = "Card" }

[[exports]]
name = "orphans"
roots = ["Orphan"]
scaffold = { package = "demo-orphan", export = "Orphan" }

[classes.View]
module = "ui/core/view"
[classes.View.members]
style = "Style"
width = "number"

[classes.ContentView]
module = "ui/content-view"
extends = "View"

[classes.Card]
module = "demo/card"
extends = "ContentView"
[classes.Card.members]
title = "string"

[classes.Orphan]
module = "demo/orphan"
[classes.Orphan.members]
size = "number"

[types.Style]
module = "ui/styling/style"
kind = "class"
"#;

    fn manifest() -> Manifest {
        Manifest::from_str(MANIFEST).unwrap()
    }

    #[test]
    fn test_exclusions_apply_to_exported_only() {
        let manifest = manifest();
        let generator = Generator::new(&manifest);
        let build = generator.build_export(manifest.export("cards").unwrap()).unwrap();

        let view = build.ambient.class("ViewAttributes").unwrap();
        assert!(view.property("style").is_some());
        assert_eq!(build.ambient.imports.len(), 1);

        let view = build.exported.class("ViewAttributes").unwrap();
        assert!(view.property("style").is_none());
        assert!(build.exported.imports.is_empty());
    }

    #[test]
    fn test_unmatched_exclusion_warns() {
        let manifest = manifest();
        let generator = Generator::new(&manifest);
        let build = generator.build_export(manifest.export("cards").unwrap()).unwrap();

        assert_eq!(build.diagnostics.len(), 1);
        assert_eq!(
            build.diagnostics[0].location.as_deref(),
            Some("CardAttributes.missing")
        );
    }

    #[test]
    fn test_scaffold_uses_wrapping_kind() {
        let manifest = manifest();
        let generator = Generator::new(&manifest);
        let build = generator.build_export(manifest.export("cards").unwrap()).unwrap();

        assert_eq!(build.wrapping, Some(WrappingKind::ContentContainer));
        let scaffold = build.scaffold.unwrap();
        assert!(scaffold.contains("'card',"));
        assert!(scaffold.contains("NSVViewFlags.CONTENT_VIEW"));
    }

    #[test]
    fn test_unsupported_scaffold_warns() {
        let manifest = manifest();
        let generator = Generator::new(&manifest);
        let build = generator
            .build_export(manifest.export("orphans").unwrap())
            .unwrap();

        assert_eq!(build.wrapping, Some(WrappingKind::Unsupported));
        assert!(build.scaffold.is_none());
        assert_eq!(build.diagnostics.len(), 1);
        assert_eq!(build.diagnostics[0].location.as_deref(), Some("Orphan"));
    }

    #[test]
    fn test_file_paths() {
        let manifest = manifest();
        let generator = Generator::new(&manifest).with_options(GenerateOptions {
            dump: true,
            only: Some("cards".to_string()),
            ..Default::default()
        });
        let paths: Vec<_> = generator
            .preview()
            .unwrap()
            .into_iter()
            .map(|p| p.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "svelte-native-defs/svelte-native-jsx-cards.d.ts",
                "react-nativescript-defs/react-nativescript-jsx-cards.ts",
                ".jsxgen/debug/cards.json",
            ]
        );
    }

    #[test]
    fn test_unknown_only_export() {
        let manifest = manifest();
        let generator = Generator::new(&manifest).with_options(GenerateOptions {
            only: Some("nope".to_string()),
            ..Default::default()
        });
        let err = generator.preview().unwrap_err();
        assert!(err.to_string().contains("unknown export 'nope'"));
    }

    #[test]
    fn test_build_all_continues_past_failures() {
        let manifest = Manifest::from_str(
            r#"
[project]
name = "demo"

[[exports]]
name = "broken"
roots = ["Broken"]

[[exports]]
name = "fine"
roots = ["Fine"]

[classes.Broken]
module = "m/broken"
extends = "Missing"

[classes.Fine]
module = "m/fine"
"#,
        )
        .unwrap();
        let results = Generator::new(&manifest).build_all().unwrap();

        assert_eq!(results.len(), 2);
        assert!(matches!(
            results[0].1,
            Err(BuildError::UnresolvableAncestor { .. })
        ));
        assert!(results[1].1.is_ok());
    }
}
