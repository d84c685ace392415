//! Declaration renderers.
//!
//! Two dialects share one layout: aliased imports, then one attribute type
//! per class. [`AmbientRenderer`] adds the global JSX namespace;
//! [`ExportedRenderer`] exports every type and can append an element
//! registration scaffold instead.

use jsxgen_codegen::WrappingKind;
use jsxgen_ir::Document;

use crate::{
    ast::{AttributeType, IntrinsicElements, Registration, TypeImport},
    code_file::DeclarationFile,
};

/// Options shared by both dialects.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Annotate each property with its provenance.
    pub debug: bool,
}

/// Turns an assembled document into declaration text.
///
/// Rendering cannot fail; everything that can go wrong is caught while the
/// document is built.
pub trait DeclarationRenderer {
    fn options(&self) -> RenderOptions;

    /// Whether attribute types are declared with `export type`.
    fn exports_types(&self) -> bool;

    /// Trailing element registry, if the dialect has one.
    fn intrinsic_elements(&self, doc: &Document) -> Option<IntrinsicElements>;

    fn render(&self, doc: &Document) -> String {
        let debug = self.options().debug;
        let exported = self.exports_types();

        let file = DeclarationFile::new()
            .imports(doc.imports.iter().map(TypeImport::from))
            .add_all(
                doc.class_definitions
                    .iter()
                    .map(|class| AttributeType::from_definition(class, debug).exported(exported)),
            );

        match self.intrinsic_elements(doc) {
            Some(namespace) => file.add(namespace).render(),
            None => file.render(),
        }
    }
}

/// Global-namespace dialect (`*.d.ts`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbientRenderer {
    options: RenderOptions,
}

impl AmbientRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl DeclarationRenderer for AmbientRenderer {
    fn options(&self) -> RenderOptions {
        self.options
    }

    fn exports_types(&self) -> bool {
        false
    }

    fn intrinsic_elements(&self, doc: &Document) -> Option<IntrinsicElements> {
        Some(IntrinsicElements::from_definitions(&doc.intrinsic_elements))
    }
}

/// Module dialect (`*.ts`) with exported attribute types.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportedRenderer {
    options: RenderOptions,
}

impl ExportedRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the element registration for a package export.
    ///
    /// Returns `None` when the view kind has no known registration shape.
    pub fn render_implementation(
        &self,
        package: &str,
        export: &str,
        kind: WrappingKind,
    ) -> Option<String> {
        Registration::new(package, export, kind).map(|r| r.build())
    }
}

impl DeclarationRenderer for ExportedRenderer {
    fn options(&self) -> RenderOptions {
        self.options
    }

    fn exports_types(&self) -> bool {
        true
    }

    fn intrinsic_elements(&self, _doc: &Document) -> Option<IntrinsicElements> {
        None
    }
}

#[cfg(test)]
mod tests {
    use jsxgen_ir::{AttributeClassDefinition, AttributePropertyDefinition, ImportAlias, IntrinsicElementDefinition};

    use super::*;

    fn document() -> Document {
        let mut widget = AttributeClassDefinition::new("WidgetAttributes", "widget.d.ts");
        widget.insert_property(AttributePropertyDefinition::instance("label", "string", "widget.d.ts"));
        widget.insert_property(AttributePropertyDefinition::instance(
            "tap",
            "(e: EventData) => void",
            "widget.d.ts",
        ));

        Document {
            imports: vec![ImportAlias::new("EventData", "m/ev", "EventData")],
            class_definitions: vec![widget],
            intrinsic_elements: vec![IntrinsicElementDefinition {
                tag_name: "widget".to_string(),
                attribute_class: "WidgetAttributes".to_string(),
            }],
        }
    }

    #[test]
    fn test_ambient_has_namespace() {
        let code = AmbientRenderer::default().render(&document());
        assert!(code.starts_with("type EventData = import(\"m/ev\").EventData;\n\n// widget.d.ts\n"));
        assert!(code.contains("type WidgetAttributes = {\n"));
        assert!(code.contains("        widget: WidgetAttributes;\n"));
        assert!(!code.contains("export type"));
    }

    #[test]
    fn test_exported_has_no_namespace() {
        let code = ExportedRenderer::default().render(&document());
        assert!(code.contains("export type WidgetAttributes = {\n"));
        assert!(!code.contains("declare namespace JSX"));
        // Imports stay private to the module
        assert!(code.starts_with("type EventData"));
    }

    #[test]
    fn test_debug_annotations() {
        let code = AmbientRenderer::new(RenderOptions { debug: true }).render(&document());
        assert!(code.contains("    label?: string; // InstanceProperty widget.d.ts\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = document();
        let renderer = ExportedRenderer::default();
        assert_eq!(renderer.render(&doc), renderer.render(&doc));
    }

    #[test]
    fn test_render_implementation_unsupported() {
        let renderer = ExportedRenderer::default();
        assert!(
            renderer
                .render_implementation("pkg", "Thing", WrappingKind::Unsupported)
                .is_none()
        );
        assert!(
            renderer
                .render_implementation("pkg", "Thing", WrappingKind::LayoutContainer)
                .is_some()
        );
    }
}
