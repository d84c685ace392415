use std::{collections::HashMap, path::Path, str::FromStr};

use super::{
    Manifest, TypeKind,
    validate::{ParseContext, find_string_spans},
};
use crate::{Error, Result};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "jsxgen.toml")
    }
}

impl Manifest {
    /// Parse a jsxgen.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a jsxgen.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = ParseContext::new(content, filename);
        let manifest: Self =
            toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;
        manifest.validate(&ctx)?;
        Ok(manifest)
    }

    /// Validate the manifest after parsing
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        self.validate_classes(ctx)?;
        self.validate_types(ctx)?;
        self.validate_exports(ctx)
    }

    fn validate_classes(&self, ctx: &ParseContext<'_>) -> Result<()> {
        for (name, class) in &self.classes {
            let class_ctx = ctx.push(name);

            if class.module.trim().is_empty() {
                return Err(class_ctx
                    .validation_error_at(format!("class '{}' has an empty module path", name), name));
            }

            for (member, decl) in &class.members {
                let mut unknown = None;
                decl.ty.for_each_name(&mut |n| {
                    if unknown.is_none() && !self.is_known_type(n) && !class.has_type_param(n) {
                        unknown = Some(n);
                    }
                });
                if let Some(n) = unknown {
                    return Err(class_ctx.push(member).unknown_type(n));
                }
            }
        }
        Ok(())
    }

    fn validate_types(&self, ctx: &ParseContext<'_>) -> Result<()> {
        for (name, decl) in &self.types {
            let type_ctx = ctx.push(name);

            if self.classes.contains_key(name) {
                return Err(type_ctx.validation_error_at(
                    format!("'{}' is declared both as a class and as a type", name),
                    name,
                ));
            }
            if decl.module.trim().is_empty() {
                return Err(type_ctx
                    .validation_error_at(format!("type '{}' has an empty module path", name), name));
            }

            match (&decl.target, decl.kind) {
                (None, TypeKind::Alias) => {
                    return Err(type_ctx.validation_error_at(
                        format!("alias '{}' requires a target", name),
                        name,
                    ));
                }
                (Some(_), kind) if kind != TypeKind::Alias => {
                    return Err(type_ctx.validation_error_at(
                        format!("'{}' is an {}, only aliases have a target", name, kind.as_str()),
                        name,
                    ));
                }
                (Some(target), _) => {
                    let mut unknown = None;
                    target.for_each_name(&mut |n| {
                        if unknown.is_none() && !self.is_known_type(n) {
                            unknown = Some(n);
                        }
                    });
                    if let Some(n) = unknown {
                        return Err(type_ctx.push("target").unknown_type(n));
                    }
                }
                (None, _) => {}
            }
        }
        Ok(())
    }

    fn validate_exports(&self, ctx: &ParseContext<'_>) -> Result<()> {
        let source = ctx.source_context();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for export in &self.exports {
            if export.name.trim().is_empty() {
                return Err(source.validation_error("export name cannot be empty"));
            }

            let occurrence = seen.entry(export.name.as_str()).or_insert(0);
            *occurrence += 1;
            if *occurrence > 1 {
                let spans = find_string_spans(ctx.src(), &export.name);
                return match (spans.first(), spans.get(1)) {
                    (Some(first), Some(second)) => {
                        Err(source.duplicate_export_error(&export.name, *first, *second))
                    }
                    _ => Err(source.validation_error(format!("duplicate export '{}'", export.name))),
                };
            }

            if export.roots.is_empty() {
                return Err(ctx.validation_error_at(
                    format!("export '{}' has no roots", export.name),
                    &export.name,
                ));
            }

            for root in &export.roots {
                if !self.classes.contains_key(root) {
                    return Err(source.unknown_class_error(root, &export.name, ctx.find_span(root)));
                }
            }

            if let Some(scaffold) = &export.scaffold {
                if !self.classes.contains_key(&scaffold.export) {
                    return Err(source.unknown_class_error(
                        &scaffold.export,
                        &export.name,
                        ctx.find_span(&scaffold.export),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeExpr;

    const BASIC: &str = r#"
[project]
name = "demo"

[[exports]]
name = "widgets"
roots = ["Widget"]

[classes.Widget]
module = "m/widget"

[classes.Widget.members]
label = "string"
color = "string | Color"
"#;

    fn base_with(extra: &str) -> String {
        format!("{}\n{}", BASIC, extra)
    }

    #[test]
    fn test_parse_basic() {
        let manifest: Manifest = base_with("[types.Color]\nmodule = \"m/color\"\nkind = \"class\"")
            .parse()
            .unwrap();

        assert_eq!(manifest.project.name, "demo");
        assert_eq!(manifest.exports.len(), 1);
        let widget = manifest.class("Widget").unwrap();
        assert_eq!(widget.members.len(), 2);
        assert_eq!(
            widget.members["label"].ty,
            TypeExpr::Keyword("string".to_string())
        );
        assert!(manifest.is_known_type("Color"));
        assert!(manifest.export("widgets").is_some());
        assert_eq!(manifest.toolkit.plain_views, vec!["View"]);
    }

    #[test]
    fn test_unknown_type() {
        let err = BASIC.parse::<Manifest>().unwrap_err();
        match *err {
            Error::UnknownType { ref name, ref context, span, .. } => {
                assert_eq!(name, "Color");
                assert_eq!(context, "'Widget.color'");
                assert!(span.is_some());
            }
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_type_params_are_known() {
        let src = r#"
[project]
name = "demo"

[classes.ListView]
module = "m/list-view"
type_params = ["T"]

[classes.ListView.members]
items = "T[]"
owner = "this"
"#;
        let manifest: Manifest = src.parse().unwrap();
        assert!(manifest.class("ListView").unwrap().has_type_param("T"));
    }

    #[test]
    fn test_unknown_extends_is_allowed() {
        let src = r#"
[project]
name = "demo"

[classes.Child]
module = "m/child"
extends = "Missing"
"#;
        let manifest: Manifest = src.parse().unwrap();
        assert_eq!(manifest.class("Child").unwrap().extends.as_deref(), Some("Missing"));
    }

    #[test]
    fn test_unknown_root() {
        let src = r#"
[project]
name = "demo"

[[exports]]
name = "widgets"
roots = ["Gadget"]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::UnknownClass { ref name, .. } if name == "Gadget"));
    }

    #[test]
    fn test_duplicate_export() {
        let src = r#"
[project]
name = "demo"

[[exports]]
name = "widgets"
roots = ["Widget"]

[[exports]]
name = "widgets"
roots = ["Widget"]

[classes.Widget]
module = "m/widget"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::DuplicateExport { ref name, .. } if name == "widgets"));
    }

    #[test]
    fn test_empty_export_name() {
        let src = r#"
[project]
name = "demo"

[[exports]]
name = ""
roots = ["Widget"]

[classes.Widget]
module = "m/widget"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_exclusion_is_parse_error() {
        let src = r#"
[project]
name = "demo"

[[exports]]
name = "widgets"
roots = ["Widget"]
exclude = ["style"]

[classes.Widget]
module = "m/widget"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_alias_requires_target() {
        let err = base_with("[types.Color]\nmodule = \"m/color\"\nkind = \"alias\"")
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { ref message, .. } if message.contains("requires a target")));
    }

    #[test]
    fn test_target_only_on_alias() {
        let err = base_with(
            "[types.Color]\nmodule = \"m/color\"\nkind = \"interface\"\ntarget = \"string\"",
        )
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_type_syntax_error_is_parse_error() {
        let src = r#"
[project]
name = "demo"

[classes.Widget]
module = "m/widget"

[classes.Widget.members]
label = "string |"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::Parse { ref source, .. } => {
                assert!(source.message().contains("invalid type expression"));
            }
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/nonexistent/jsxgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
