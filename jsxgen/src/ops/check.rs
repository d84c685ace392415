//! Check operation - build every export without writing.

use std::path::Path;

use eyre::Result;
use jsxgen_codegen_typescript::Generator;
use jsxgen_manifest::Manifest;

use super::describe;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Unlike `bake`, a failing export does not stop the remaining ones.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let generator = Generator::new(manifest);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut exports = 0;

    for (name, result) in generator.build_all()? {
        exports += 1;
        match result {
            Ok(build) => warnings.extend(build.diagnostics.iter().map(describe)),
            Err(err) => {
                errors.push(format!("[{}] {:?}", name, miette::Report::new(err)));
            }
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        exports,
        errors,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::reports::{Report, testing::BufferOutput};

    #[test]
    fn test_check_reports_every_failing_export() {
        let manifest = Manifest::from_str(
            r#"
[project]
name = "demo"

[[exports]]
name = "broken"
roots = ["Broken"]

[[exports]]
name = "fine"
roots = ["Fine"]
exclude = ["FineAttributes.gone"]

[classes.Broken]
module = "m/broken"
extends = "Missing"

[classes.Fine]
module = "m/fine"
"#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("jsxgen.toml")).unwrap();

        assert_eq!(report.exports, 2);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("[broken]"));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("FineAttributes.gone"));
    }

    #[test]
    fn test_check_valid_manifest() {
        let manifest = Manifest::from_str(
            r#"
[project]
name = "demo"

[[exports]]
name = "fine"
roots = ["Fine"]

[classes.Fine]
module = "m/fine"
"#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("jsxgen.toml")).unwrap();
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.is_valid());
        assert_eq!(out.text(), "✓ jsxgen.toml is valid (1 export)");
    }
}
