use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "jsxgen.toml");
/// ctx.validation_error("export name cannot be empty");
/// ctx.unknown_type_error("Colour", "RadSideDrawer.drawerColor", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an unknown type error.
    pub fn unknown_type_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an unknown class error.
    pub fn unknown_class_error(
        &self,
        name: impl Into<String>,
        export: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownClass {
            src: self.named_source(),
            span,
            name: name.into(),
            export: export.into(),
        })
    }

    /// Create a duplicate export error.
    pub fn duplicate_export_error(
        &self,
        name: impl Into<String>,
        first_span: SourceSpan,
        second_span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateExport {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse jsxgen.toml")]
    #[diagnostic(code(jsxgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown type '{name}' in {context}")]
    #[diagnostic(
        code(jsxgen::unknown_type),
        help("declare it under [classes.{name}] or [types.{name}], or add it to the class's type_params")
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared in this manifest")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("export '{export}' references unknown class '{name}'")]
    #[diagnostic(
        code(jsxgen::unknown_class),
        help("declare the class under [classes.{name}]")
    )]
    UnknownClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown class")]
        span: Option<SourceSpan>,
        name: String,
        export: String,
    },

    #[error("duplicate export '{name}'")]
    #[diagnostic(
        code(jsxgen::duplicate_export),
        help("every [[exports]] entry needs a unique name; it is used in output file names")
    )]
    DuplicateExport {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(jsxgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
