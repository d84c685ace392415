//! Element registration scaffold for the exported dialect.

use jsxgen_codegen::{
    WrappingKind,
    builder::{CodeBuilder, CodeFragment, Renderable},
};
use jsxgen_core::to_lower_first;

const RUNTIME_PACKAGE: &str = "react-nativescript";
const FILL_IN: &str = "You need to fill this in!";

/// How the registered element attaches children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementOptions {
    /// A `viewFlags` constant handled by the runtime.
    ViewFlags(&'static str),
    /// Hand-written `nodeOps` stubs.
    NodeOps,
}

/// A `registerElement(...)` call wiring a package export into the renderer.
///
/// Content and layout containers get view flags. Only a plain view gets the
/// `nodeOps` stub, since the runtime cannot know where its children go.
#[derive(Debug, Clone)]
pub struct Registration {
    package: String,
    export: String,
    options: ElementOptions,
}

impl Registration {
    /// Returns `None` for [`WrappingKind::Unsupported`].
    pub fn new(
        package: impl Into<String>,
        export: impl Into<String>,
        kind: WrappingKind,
    ) -> Option<Self> {
        let options = match kind {
            WrappingKind::ContentContainer => ElementOptions::ViewFlags("CONTENT_VIEW"),
            WrappingKind::LayoutContainer => ElementOptions::ViewFlags("LAYOUT_VIEW"),
            WrappingKind::PlainView => ElementOptions::NodeOps,
            WrappingKind::Unsupported => return None,
        };
        Some(Self {
            package: package.into(),
            export: export.into(),
            options,
        })
    }

    /// Tag name the element is registered under.
    pub fn tag_name(&self) -> String {
        to_lower_first(&self.export)
    }

    fn options(&self) -> CodeFragment {
        let close = Some("}".to_string());
        match self.options {
            ElementOptions::ViewFlags(flag) => CodeFragment::block(
                "{",
                vec![CodeFragment::line(format!("viewFlags: NSVViewFlags.{},", flag))],
                close,
            ),
            ElementOptions::NodeOps => CodeFragment::block(
                "{",
                vec![CodeFragment::block(
                    "nodeOps: {",
                    vec![
                        CodeFragment::block(
                            "insert(child: NSVElement, parent: NSVElement, atIndex?: number): void {",
                            vec![CodeFragment::comment(FILL_IN)],
                            Some("},".to_string()),
                        ),
                        CodeFragment::block(
                            "remove(child: NSVElement, parent: NSVElement): void {",
                            vec![CodeFragment::comment(FILL_IN)],
                            Some("}".to_string()),
                        ),
                    ],
                    Some("}".to_string()),
                )],
                close,
            ),
        }
    }

    /// Build the scaffold as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Registration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(format!(
                "import {{ registerElement, NSVElement, NSVViewFlags }} from \"{}\";",
                RUNTIME_PACKAGE
            )),
            CodeFragment::blank(),
            CodeFragment::block(
                "registerElement(",
                vec![
                    CodeFragment::line(format!("'{}',", self.tag_name())),
                    CodeFragment::line(format!(
                        "() => require('{}')[\"{}\"],",
                        self.package, self.export
                    )),
                    self.options(),
                ],
                Some(");".to_string()),
            ),
        ]
    }
}
