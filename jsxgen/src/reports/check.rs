//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from building every export.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of exports built.
    pub exports: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} export{})",
                self.config_path.display(),
                self.exports,
                if self.exports == 1 { "" } else { "s" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    fn report(errors: Vec<&str>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("jsxgen.toml"),
            exports: 2,
            errors: errors.into_iter().map(String::from).collect(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_valid_report() {
        let mut out = BufferOutput::default();
        report(vec![]).render(&mut out);
        assert_eq!(out.text(), "✓ jsxgen.toml is valid (2 exports)");
    }

    #[test]
    fn test_errors_suppress_summary() {
        let report = report(vec!["[cards] unknown class 'Ghost'"]);
        assert!(!report.is_valid());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["error: [cards] unknown class 'Ghost'", ""]);
    }
}
