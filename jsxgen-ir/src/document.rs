//! The assembled declaration document.

use jsxgen_core::string_literal_end;
use serde::Serialize;

use crate::AttributeClassDefinition;

/// A short local name for a symbol declared in another module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportAlias {
    /// Alias used in type expressions, unique within a document.
    pub alias: String,
    /// Module the symbol is declared in.
    pub module_path: String,
    /// Symbol name inside the module.
    pub symbol_name: String,
}

impl ImportAlias {
    pub fn new(
        alias: impl Into<String>,
        module_path: impl Into<String>,
        symbol_name: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            module_path: module_path.into(),
            symbol_name: symbol_name.into(),
        }
    }
}

/// A JSX tag bound to an attribute class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntrinsicElementDefinition {
    /// Lower-cased source class name.
    pub tag_name: String,
    /// Name of the attribute class describing the tag's attributes.
    pub attribute_class: String,
}

/// Everything a renderer needs to emit one declaration file.
///
/// All three lists are sorted (imports by alias, classes by name, elements
/// by tag) so two builds over the same input render byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub imports: Vec<ImportAlias>,
    pub class_definitions: Vec<AttributeClassDefinition>,
    pub intrinsic_elements: Vec<IntrinsicElementDefinition>,
}

impl Document {
    /// Get a class definition by attribute class name.
    pub fn class(&self, class_name: &str) -> Option<&AttributeClassDefinition> {
        self.class_definitions
            .iter()
            .find(|c| c.class_name == class_name)
    }

    /// Get an import by alias.
    pub fn import(&self, alias: &str) -> Option<&ImportAlias> {
        self.imports.iter().find(|i| i.alias == alias)
    }

    /// Find the alias assigned to a `(module_path, symbol_name)` pair.
    pub fn alias_for(&self, module_path: &str, symbol_name: &str) -> Option<&str> {
        self.imports
            .iter()
            .find(|i| i.module_path == module_path && i.symbol_name == symbol_name)
            .map(|i| i.alias.as_str())
    }

    /// Get the intrinsic element bound to a tag.
    pub fn element(&self, tag_name: &str) -> Option<&IntrinsicElementDefinition> {
        self.intrinsic_elements
            .iter()
            .find(|e| e.tag_name == tag_name)
    }

    /// Remove a property from a class.
    ///
    /// Returns `true` if the property existed.
    pub fn exclude_property(&mut self, class_name: &str, property: &str) -> bool {
        self.class_definitions
            .iter_mut()
            .find(|c| c.class_name == class_name)
            .and_then(|c| c.properties.shift_remove(property))
            .is_some()
    }

    /// Drop imports that no property type references.
    ///
    /// Returns the number of removed imports. Sort order is preserved.
    pub fn prune_imports(&mut self) -> usize {
        let before = self.imports.len();
        let classes = &self.class_definitions;
        self.imports.retain(|import| {
            classes.iter().any(|c| {
                c.properties
                    .values()
                    .any(|p| references_identifier(&p.ty, &import.alias))
            })
        });
        before - self.imports.len()
    }
}

/// Check whether `text` contains `ident` as a whole identifier token.
///
/// String literals are skipped, so `"View"` does not reference `View`.
pub fn references_identifier(text: &str, ident: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c == b'"' || c == b'\'' {
            i = string_literal_end(text, i);
        } else if is_ident_start(c) {
            let start = i;
            while i < bytes.len() && is_ident_continue(bytes[i]) {
                i += 1;
            }
            if &text[start..i] == ident {
                return true;
            }
        } else {
            i += 1;
        }
    }

    false
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
}
