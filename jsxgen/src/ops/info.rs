//! Info operation - project information.

use std::path::Path;

use jsxgen_codegen::{ClassGraphProvider, ManifestProvider, WrappingKind, ancestor_chain};
use jsxgen_manifest::{ExportConfig, Manifest};

use crate::reports::{ExportInfo, InfoReport, RootInfo, Stats};

/// Execute the info operation.
///
/// Collects project information from the manifest.
pub fn info(manifest: &Manifest, config_path: &Path) -> InfoReport {
    let provider = ManifestProvider::new(manifest);

    InfoReport {
        name: manifest.project.name.clone(),
        description: manifest.project.description.clone(),
        config_path: std::fs::canonicalize(config_path)
            .unwrap_or_else(|_| config_path.to_path_buf()),
        stats: Stats {
            classes: manifest.classes.len(),
            types: manifest.types.len(),
            exports: manifest.exports.len(),
        },
        exports: manifest
            .exports
            .iter()
            .map(|export| collect_export(&provider, manifest, export))
            .collect(),
    }
}

fn collect_export(
    provider: &ManifestProvider<'_>,
    manifest: &Manifest,
    export: &ExportConfig,
) -> ExportInfo {
    ExportInfo {
        name: export.name.clone(),
        roots: export
            .roots
            .iter()
            .map(|root| collect_root(provider, manifest, root))
            .collect(),
        excludes: export.exclude.iter().map(ToString::to_string).collect(),
        scaffold: export
            .scaffold
            .as_ref()
            .map(|s| format!("{} from {}", s.export, s.package)),
    }
}

fn collect_root(provider: &ManifestProvider<'_>, manifest: &Manifest, root: &str) -> RootInfo {
    let Some(class) = provider.lookup_class(root) else {
        return RootInfo {
            name: root.to_string(),
            chain: "not declared".to_string(),
            wrapping: None,
        };
    };

    let chain = match ancestor_chain(provider, &class) {
        Ok(ancestors) => std::iter::once(root.to_string())
            .chain(ancestors.iter().map(|a| provider.class_name(a)))
            .collect::<Vec<_>>()
            .join(" → "),
        Err(err) => format!("error: {}", err),
    };

    RootInfo {
        name: root.to_string(),
        chain,
        wrapping: WrappingKind::classify(provider, &class, &manifest.toolkit).ok(),
    }
}
