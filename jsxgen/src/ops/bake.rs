//! Bake operation - declaration generation from manifest.

use std::path::Path;

use eyre::{Context, Result};
use jsxgen_codegen_typescript::{DEBUG_DIR, GenerateOptions, Generator};
use jsxgen_manifest::Manifest;

use super::describe;
use crate::reports::{BakeReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to annotate properties with their origin.
    pub debug: bool,
    /// Whether to write document dumps.
    pub dump: bool,
    /// Restrict generation to one export.
    pub only: Option<String>,
}

/// Execute the bake operation.
///
/// Builds every selected export and either writes or previews the files.
/// The first export that fails to build aborts the run.
pub fn bake(manifest: &Manifest, opts: BakeOptions) -> Result<BakeReport> {
    let generator = Generator::new(manifest).with_options(GenerateOptions {
        debug: opts.debug,
        dump: opts.dump,
        only: opts.only.clone(),
    });

    let exports = generator
        .exports()?
        .into_iter()
        .map(|e| e.name.clone())
        .collect();

    let (registry, diagnostics) = generator.registry()?;
    let warnings = diagnostics.iter().map(describe).collect();

    let result = if opts.dry_run {
        let files = registry
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let stats = registry
            .write_all(opts.output_dir)
            .wrap_err("Failed to write declaration files")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: stats.written_paths,
            debug_dir: opts.dump.then(|| opts.output_dir.join(DEBUG_DIR)),
        })
    };

    Ok(BakeReport {
        project_name: manifest.project.name.clone(),
        project_description: manifest.project.description.clone(),
        warnings,
        exports,
        result,
    })
}
