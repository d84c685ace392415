//! Aliased type import.

use jsxgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use jsxgen_ir::ImportAlias;

/// A `type Alias = import("module").Symbol;` line.
///
/// Type-position imports keep the declaration file free of runtime
/// `import` statements, so the ambient dialect stays a global script.
#[derive(Debug, Clone)]
pub struct TypeImport {
    alias: String,
    from: String,
    symbol: String,
}

impl TypeImport {
    pub fn new(alias: impl Into<String>, from: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            from: from.into(),
            symbol: symbol.into(),
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl From<&ImportAlias> for TypeImport {
    fn from(import: &ImportAlias) -> Self {
        Self::new(&import.alias, &import.module_path, &import.symbol_name)
    }
}

impl Renderable for TypeImport {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "type {} = import(\"{}\").{};",
            self.alias, self.from, self.symbol
        ))]
    }
}
