//! File registration for declarative output.
//!
//! Generators register every file they produce and the registry decides
//! the write order, so previews and real runs see the same list.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register_all([
//!     FileEntry::ambient(output.ambient_path("core"), ambient),
//!     FileEntry::exported(output.exported_path("core"), exported),
//! ]);
//! registry.write_all(&output_dir)?;
//! ```

use std::path::Path;

use eyre::{Result, WrapErr};
use jsxgen_core::write_file;
use log::debug;

/// Category of generated file, determining write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Ambient-namespace declarations.
    Ambient,
    /// Exported declarations with optional registration scaffold.
    Exported,
    /// Document dumps.
    Debug,
}

/// A file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

impl FileEntry {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    pub fn ambient(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Ambient)
    }

    pub fn exported(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Exported)
    }

    pub fn debug(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Debug)
    }

    /// Write this file to disk, replacing any existing file.
    pub fn write(&self, base: &Path) -> Result<()> {
        let path = base.join(&self.path);
        debug!(path:% = path.display(), bytes = self.content.len(); "Writing file");
        write_file(&path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }
}

/// Registry for collecting generated files.
///
/// Files are written in category order: Ambient -> Exported -> Debug.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        self.entries.extend(entries);
    }

    /// Get all registered entries, sorted by category.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    /// Preview all files without writing them.
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write all files to the output directory.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            entry.write(base)?;
            stats.written += 1;
            stats.written_paths.push(entry.path.clone());
        }

        Ok(stats)
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub path: String,
    pub content: String,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    pub written: usize,
    pub written_paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_registry_ordering() {
        let mut registry = FileRegistry::new();

        registry.register_all([
            FileEntry::debug(".jsxgen/debug/core.json", "{}"),
            FileEntry::exported("b/core.ts", ""),
            FileEntry::ambient("a/core.d.ts", ""),
        ]);

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["a/core.d.ts", "b/core.ts", ".jsxgen/debug/core.json"]
        );
    }

    #[test]
    fn test_registry_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();

        registry.register_all([
            FileEntry::ambient("defs/a.d.ts", "declare namespace JSX {}"),
            FileEntry::exported("defs/b.ts", "export type A = {};"),
        ]);

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 2);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("defs/b.ts")).unwrap(),
            "export type A = {};"
        );
    }

    #[test]
    fn test_existing_files_are_replaced() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.d.ts");
        std::fs::write(&path, "stale").unwrap();

        let mut registry = FileRegistry::new();
        registry.register_all([FileEntry::ambient("a.d.ts", "fresh")]);
        registry.write_all(temp.path()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_preview() {
        let mut registry = FileRegistry::new();
        registry.register_all([
            FileEntry::exported("b.ts", "content b"),
            FileEntry::ambient("a.d.ts", "content a"),
        ]);

        let preview = registry.preview();

        let paths: Vec<_> = preview.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["a.d.ts", "b.ts"]);
        assert_eq!(preview[1].content, "content b");
    }
}
