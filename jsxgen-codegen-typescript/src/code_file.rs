//! DeclarationFile abstraction for structured declaration output.
//!
//! Organizes a generated file into an imports section followed by body
//! elements separated by blank lines.

use jsxgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::TypeImport;

/// A structured representation of a declaration file.
///
/// # Example
///
/// ```ignore
/// let file = DeclarationFile::new()
///     .imports([TypeImport::new("Color", "@nativescript/core/color", "Color")])
///     .add(AttributeType::new("LabelAttributes"))
///     .render();
/// ```
#[derive(Default)]
pub struct DeclarationFile {
    imports: Vec<TypeImport>,
    body: Vec<Vec<CodeFragment>>,
}

impl DeclarationFile {
    /// Create a new empty DeclarationFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = TypeImport>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
