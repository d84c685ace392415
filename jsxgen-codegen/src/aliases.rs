//! Import aliasing.
//!
//! Canonical type text refers to declarations in other modules with
//! `import("module/path").Symbol`. The registry replaces each reference with
//! a short alias and remembers the `(module, symbol)` pair so the renderer
//! can emit one `type Alias = import("module/path").Symbol;` line for it.

use std::collections::{HashMap, HashSet};

use jsxgen_core::{module_basename, string_literal_end, to_pascal_case};
use jsxgen_ir::ImportAlias;
use log::debug;

use crate::{BuildError, Result};

/// Numbered suffixes tried before giving up on an alias.
pub const MAX_ALIAS_SUFFIX: usize = 10_000;

const IMPORT_PREFIX: &str = "import(";

/// Aliases minted during one document build.
#[derive(Debug, Default)]
pub struct ImportRegistry {
    by_target: HashMap<(String, String), String>,
    taken: HashSet<String>,
    imports: Vec<ImportAlias>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the alias already assigned to a symbol.
    pub fn get(&self, module_path: &str, symbol_name: &str) -> Option<&str> {
        self.by_target
            .get(&(module_path.to_string(), symbol_name.to_string()))
            .map(String::as_str)
    }

    /// All aliases, sorted by alias.
    pub fn into_imports(mut self) -> Vec<ImportAlias> {
        self.imports.sort_by(|a, b| a.alias.cmp(&b.alias));
        self.imports
    }

    /// Get or mint the alias for a symbol.
    ///
    /// New aliases are tried in order: the symbol itself, the symbol prefixed
    /// with the PascalCase module basename, then that name with `_1`, `_2`, ...
    pub fn alias(&mut self, module_path: &str, symbol_name: &str) -> Result<String> {
        let key = (module_path.to_string(), symbol_name.to_string());
        if let Some(alias) = self.by_target.get(&key) {
            return Ok(alias.clone());
        }

        let alias = self.mint(module_path, symbol_name)?;
        debug!(
            alias = alias.as_str(),
            module_path = module_path,
            symbol_name = symbol_name;
            "Minted import alias"
        );

        self.by_target.insert(key, alias.clone());
        self.taken.insert(alias.clone());
        self.imports
            .push(ImportAlias::new(&alias, module_path, symbol_name));
        Ok(alias)
    }

    fn mint(&self, module_path: &str, symbol_name: &str) -> Result<String> {
        if !self.is_taken(symbol_name) {
            return Ok(symbol_name.to_string());
        }

        let prefixed = format!(
            "{}{}",
            to_pascal_case(module_basename(module_path)),
            symbol_name
        );
        if !self.is_taken(&prefixed) {
            return Ok(prefixed);
        }

        (1..=MAX_ALIAS_SUFFIX)
            .map(|n| format!("{}_{}", prefixed, n))
            .find(|candidate| !self.is_taken(candidate))
            .ok_or_else(|| BuildError::AliasExhaustion {
                symbol: symbol_name.to_string(),
                module_path: module_path.to_string(),
            })
    }

    fn is_taken(&self, alias: &str) -> bool {
        self.taken.contains(alias)
    }

    /// Replace every `import("P").S` reference in `text` with an alias.
    ///
    /// Generic argument lists are rewritten first, innermost first, and the
    /// outer expression last. String literals are left alone.
    pub fn rewrite(&mut self, text: &str) -> Result<String> {
        let inner = self.rewrite_generic_groups(text)?;
        self.rewrite_references(&inner)
    }

    fn rewrite_generic_groups(&mut self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];
            if rest.starts_with('"') || rest.starts_with('\'') {
                let end = string_literal_end(text, i);
                out.push_str(&text[i..end]);
                i = end;
            } else if rest.starts_with('<') {
                match matching_angle(text, i) {
                    Some(close) => {
                        out.push('<');
                        out.push_str(&self.rewrite(&text[i + 1..close])?);
                        out.push('>');
                        i = close + 1;
                    }
                    None => {
                        out.push('<');
                        i += 1;
                    }
                }
            } else {
                let c = next_char(rest);
                out.push(c);
                i += c.len_utf8();
            }
        }

        Ok(out)
    }

    fn rewrite_references(&mut self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];
            if rest.starts_with('"') || rest.starts_with('\'') {
                let end = string_literal_end(text, i);
                out.push_str(&text[i..end]);
                i = end;
            } else if rest.starts_with('<') {
                // Already rewritten.
                let end = matching_angle(text, i).map_or(i + 1, |close| close + 1);
                out.push_str(&text[i..end]);
                i = end;
            } else if rest.starts_with(IMPORT_PREFIX) && !follows_identifier(text, i) {
                match parse_reference(rest) {
                    Some(reference) => {
                        out.push_str(&self.alias(reference.module_path, reference.symbol)?);
                        i += reference.len;
                    }
                    None => {
                        out.push_str(IMPORT_PREFIX);
                        i += IMPORT_PREFIX.len();
                    }
                }
            } else {
                let c = next_char(rest);
                out.push(c);
                i += c.len_utf8();
            }
        }

        Ok(out)
    }
}

struct Reference<'a> {
    module_path: &'a str,
    symbol: &'a str,
    len: usize,
}

/// Parse `import("P").S` at the start of `text`.
///
/// Only the first identifier after the dot is the symbol; qualified member
/// names, generic arguments and `[]` suffixes remain in the text.
fn parse_reference(text: &str) -> Option<Reference<'_>> {
    let after_prefix = text.strip_prefix(IMPORT_PREFIX)?;
    let quote = after_prefix.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let path_start = IMPORT_PREFIX.len() + 1;
    let path_len = text[path_start..].find(quote)?;
    let module_path = &text[path_start..path_start + path_len];

    let mut pos = path_start + path_len + 1;
    pos += text[pos..].strip_prefix(").").map(|_| 2)?;

    let symbol_len = text[pos..]
        .char_indices()
        .find(|(idx, c)| {
            if *idx == 0 {
                !(c.is_alphabetic() || *c == '_' || *c == '$')
            } else {
                !(c.is_alphanumeric() || *c == '_' || *c == '$')
            }
        })
        .map_or(text.len() - pos, |(idx, _)| idx);
    if symbol_len == 0 {
        return None;
    }

    Some(Reference {
        module_path,
        symbol: &text[pos..pos + symbol_len],
        len: pos + symbol_len,
    })
}

fn next_char(s: &str) -> char {
    s.chars().next().unwrap_or('\0')
}

/// Byte offset of the `>` closing the `<` at `open`.
///
/// The `>` of an arrow (`=>`) does not close a group.
fn matching_angle(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                i = string_literal_end(text, i);
                continue;
            }
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'=' => {}
            b'>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

fn follows_identifier(text: &str, i: usize) -> bool {
    text[..i]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$' || c == '.')
}
