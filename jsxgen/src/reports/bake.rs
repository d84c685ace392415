//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Project name from manifest.
    pub project_name: String,

    /// Project description from manifest.
    pub project_description: Option<String>,

    /// Warnings raised while building exports.
    pub warnings: Vec<String>,

    /// Names of the exports that were built.
    pub exports: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, relative to the output directory.
    pub files: Vec<String>,
    /// Path to document dumps, if enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&self.project_name);
        if let Some(desc) = &self.project_description {
            out.preformatted(desc);
        }
        out.newline();

        out.section(&format!("Exports ({})", self.exports.len()));
        for export in &self.exports {
            out.list_item(export);
        }
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for file in &written.files {
            out.added_item(file);
        }

        if let Some(debug_dir) = &written.debug_dir {
            out.newline();
            out.key_value("Documents dumped to", &debug_dir.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
