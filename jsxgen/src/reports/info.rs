//! Info command report data structures.

use std::path::PathBuf;

use jsxgen_codegen::WrappingKind;

use super::output::{Output, Report};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: Option<String>,
    /// Config file path.
    pub config_path: PathBuf,
    /// Manifest statistics.
    pub stats: Stats,
    /// Per-export details.
    pub exports: Vec<ExportInfo>,
}

/// Manifest statistics.
#[derive(Debug, Default)]
pub struct Stats {
    pub classes: usize,
    pub types: usize,
    pub exports: usize,
}

/// Export details.
#[derive(Debug)]
pub struct ExportInfo {
    pub name: String,
    pub roots: Vec<RootInfo>,
    /// Exclusions as `Class.property`.
    pub excludes: Vec<String>,
    /// Scaffold description, if one is requested.
    pub scaffold: Option<String>,
}

/// A root class and where it sits in the class graph.
#[derive(Debug)]
pub struct RootInfo {
    pub name: String,
    /// The class followed by its ancestors, or why they can't be listed.
    pub chain: String,
    pub wrapping: Option<WrappingKind>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        // Header
        out.preformatted(&format!("  {}", self.name));
        out.preformatted(&format!("  {}", "─".repeat(self.name.chars().count())));
        if let Some(desc) = &self.description {
            out.preformatted(&format!("  {}", desc));
        }
        out.newline();

        out.preformatted(&format!("  Config      {}", self.config_path.display()));
        out.newline();

        // Statistics
        out.preformatted("  Statistics");
        out.preformatted("  ──────────");
        out.preformatted(&format!("  Classes     {}", self.stats.classes));
        out.preformatted(&format!("  Types       {}", self.stats.types));
        out.preformatted(&format!("  Exports     {}", self.stats.exports));

        for export in &self.exports {
            out.newline();
            out.preformatted(&format!("  {}", export.name));
            out.preformatted(&format!("  {}", "─".repeat(export.name.chars().count())));
            for root in &export.roots {
                let wrapping = root
                    .wrapping
                    .map(|w| format!(" ({})", w))
                    .unwrap_or_default();
                out.preformatted(&format!("  {}{}", root.chain, wrapping));
            }
            for exclude in &export.excludes {
                out.preformatted(&format!("              └─ excludes {}", exclude));
            }
            if let Some(scaffold) = &export.scaffold {
                out.preformatted(&format!("              └─ registers {}", scaffold));
            }
        }
    }
}
