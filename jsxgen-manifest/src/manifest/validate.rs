//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::error::{Error, SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest, so errors can name where they occurred.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "jsxgen.toml");
/// let member = ctx.push("RadSideDrawer").push("drawerContent");
/// member.unknown_type("Colour");
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments (e.g., ["RadSideDrawer", "drawerContent"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Create an unknown type error for a type name used at the current path.
    ///
    /// The span points at the type name inside the member declaration when
    /// it can be located.
    pub fn unknown_type(&self, name: &str) -> Box<Error> {
        let span = self.locate_in_path(name);
        self.source
            .unknown_type_error(name, format!("'{}'", self.path_string()), span)
    }

    /// Create a validation error located at a name.
    pub fn validation_error_at(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        self.source
            .validation_error_at(message, self.find_span(name))
    }

    /// Locate `word` after the last path segment's key.
    fn locate_in_path(&self, word: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let mut from = 0;
        for segment in &self.path {
            let (start, _) = find_word_from(src, segment, from)?;
            from = start + segment.len();
        }
        find_word_from(src, word, from).map(|(start, len)| SourceSpan::from((start, len)))
    }
}

/// Find the span of a name in the TOML source.
///
/// Searches for table headers (`.name]`, `.name.`), quoted strings
/// (`"name"`), and keys (`name =`).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns_skip_1 = [
        format!(".{}]", name),  // [classes.Name]
        format!(".{}.", name),  // [classes.Name.members]
        format!("\"{}\"", name), // roots = ["Name"]
        format!("'{}'", name),
    ];

    for pattern in &patterns_skip_1 {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Keys at the start of a line
    let key_patterns = [format!("\n{} =", name), format!("\n{}=", name)];
    for pattern in &key_patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

/// Find every span of a quoted string value equal to `value`.
pub(crate) fn find_string_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let pattern = format!("\"{}\"", value);
    src.match_indices(pattern.as_str())
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
        .collect()
}

/// Find `word` as a whole identifier at or after byte offset `from`.
fn find_word_from(src: &str, word: &str, from: usize) -> Option<(usize, usize)> {
    if word.is_empty() || from > src.len() {
        return None;
    }
    let bytes = src.as_bytes();
    let mut offset = from;

    while let Some(pos) = src.get(offset..)?.find(word) {
        let start = offset + pos;
        let end = start + word.len();
        let before_ok = start == 0 || !is_word_byte(bytes[start - 1]);
        let after_ok = end >= bytes.len() || !is_word_byte(bytes[end]);
        if before_ok && after_ok {
            return Some((start, word.len()));
        }
        offset = start + 1;
    }

    None
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_name_span_header() {
        let src = "[classes.Button]\nmodule = \"core/button\"";
        let span = find_name_span(src, "Button").unwrap();
        assert_eq!(span.offset(), 9);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_name_span_nested_header() {
        let src = "[classes.Button.members]\ntext = \"string\"";
        let span = find_name_span(src, "Button").unwrap();
        assert_eq!(span.offset(), 9);
    }

    #[test]
    fn test_find_name_span_quoted() {
        let src = "roots = [\"Button\"]";
        let span = find_name_span(src, "Button").unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("name = \"core\"", "Button").is_none());
    }

    #[test]
    fn test_find_word_from_skips_partial_matches() {
        let src = "a = \"ViewBase | View\"";
        let (start, len) = find_word_from(src, "View", 0).unwrap();
        assert_eq!(&src[start..start + len], "View");
        assert_eq!(start, 16);
    }

    #[test]
    fn test_unknown_type_span() {
        let src = "[classes.Button.members]\ncolor = \"string | Colour\"\n";
        let ctx = ParseContext::new(src, "jsxgen.toml");
        let err = ctx.push("Button").push("color").unknown_type("Colour");
        match *err {
            Error::UnknownType { span, ref context, .. } => {
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "Colour");
                assert_eq!(context, "'Button.color'");
            }
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_find_string_spans() {
        let src = "name = \"core\"\nname = \"core\"";
        let spans = find_string_spans(src, "core");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].offset(), 8);
    }
}
