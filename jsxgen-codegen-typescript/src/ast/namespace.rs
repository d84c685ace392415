//! The global JSX namespace block.

use jsxgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use jsxgen_ir::IntrinsicElementDefinition;

/// Catch-all entry so unknown tags still type-check.
const INDEX_SIGNATURE: &str = "[name: string]: { [name: string]: any };";

/// `declare namespace JSX { interface IntrinsicElements { ... } }`
#[derive(Debug, Clone, Default)]
pub struct IntrinsicElements {
    elements: Vec<(String, String)>,
}

impl IntrinsicElements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a tag to its attribute type.
    pub fn element(mut self, tag: impl Into<String>, attributes: impl Into<String>) -> Self {
        self.elements.push((tag.into(), attributes.into()));
        self
    }

    pub fn from_definitions(elements: &[IntrinsicElementDefinition]) -> Self {
        elements.iter().fold(Self::new(), |ns, e| {
            ns.element(&e.tag_name, &e.attribute_class)
        })
    }

    /// Build the block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for IntrinsicElements {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .elements
            .iter()
            .map(|(tag, attributes)| CodeFragment::line(format!("{}: {};", tag, attributes)))
            .collect();
        body.push(CodeFragment::line(INDEX_SIGNATURE));

        vec![CodeFragment::block(
            "declare namespace JSX {",
            vec![CodeFragment::block(
                "interface IntrinsicElements {",
                body,
                Some("}".to_string()),
            )],
            Some("}".to_string()),
        )]
    }
}
