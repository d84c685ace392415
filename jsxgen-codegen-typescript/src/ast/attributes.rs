//! Attribute type declarations.

use jsxgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use jsxgen_core::module_basename;
use jsxgen_ir::AttributeClassDefinition;

/// One optional property line inside an attribute type.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    annotation: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotation: None,
        }
    }

    /// Trailing `//` comment after the property.
    pub fn annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = Some(text.into());
        self
    }

    fn render(&self) -> String {
        match &self.annotation {
            Some(note) => format!("{}?: {}; // {}", self.name, self.ty, note),
            None => format!("{}?: {};", self.name, self.ty),
        }
    }
}

/// `type XAttributes = Parent & { ... };`
#[derive(Debug, Clone)]
pub struct AttributeType {
    name: String,
    exported: bool,
    parents: Vec<String>,
    properties: Vec<Property>,
    source: Option<String>,
}

impl AttributeType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: false,
            parents: Vec::new(),
            properties: Vec::new(),
            source: None,
        }
    }

    /// Build from a class definition, properties ordered by name.
    ///
    /// With `debug` set, every property is annotated with its provenance.
    pub fn from_definition(class: &AttributeClassDefinition, debug: bool) -> Self {
        let mut ty = Self::new(&class.class_name).source(&class.origin);
        for parent in &class.parent_class_definitions {
            ty = ty.parent(parent);
        }
        for property in class.sorted_properties() {
            let mut line = Property::new(&property.name, &property.ty);
            if debug {
                line = line.annotation(format!(
                    "{} {}",
                    property.origin.derived_from.as_str(),
                    module_basename(&property.origin.source_location)
                ));
            }
            ty = ty.property(line);
        }
        ty
    }

    /// Prefix the declaration with `export`.
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.parents.push(name.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Source location comment emitted above the declaration.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    fn head(&self) -> String {
        let keyword = if self.exported { "export type" } else { "type" };
        let parents: String = self.parents.iter().map(|p| format!("{} & ", p)).collect();
        format!("{} {} = {}", keyword, self.name, parents)
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for AttributeType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(source) = &self.source {
            fragments.push(CodeFragment::comment(source));
        }

        if self.properties.is_empty() {
            fragments.push(CodeFragment::line(format!("{}{{}};", self.head())));
        } else {
            fragments.push(CodeFragment::block(
                format!("{}{{", self.head()),
                self.properties
                    .iter()
                    .map(|p| CodeFragment::line(p.render()))
                    .collect(),
                Some("};".to_string()),
            ));
        }

        fragments
    }
}
