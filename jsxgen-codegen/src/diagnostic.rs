//! Non-fatal findings reported while generating an export.
//!
//! Anything that stops a build is a [`BuildError`](crate::BuildError); a
//! diagnostic is always a warning and never prevents files from being written.

use serde::Serialize;

/// A warning attached to one export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Export that produced this diagnostic.
    pub export: String,
    pub message: String,
    /// Optional location (e.g., "ViewBaseAttributes.style").
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn warning(export: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            export: export.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warning[{}]: {}", self.export, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
