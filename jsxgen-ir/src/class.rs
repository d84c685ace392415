//! Attribute class definitions.

use indexmap::IndexMap;
use serde::Serialize;

/// Where a generated property came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DerivedFrom {
    /// A public instance property declared on the class.
    InstanceProperty,
}

impl DerivedFrom {
    /// Get the name used in debug annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            DerivedFrom::InstanceProperty => "InstanceProperty",
        }
    }
}

/// Provenance of a property definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyOrigin {
    /// Source file the member is declared in.
    pub source_location: String,
    /// Kind of member the property was derived from.
    pub derived_from: DerivedFrom,
}

/// A single optional attribute of a generated attribute class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributePropertyDefinition {
    /// Property name, unique within its owning class.
    pub name: String,
    /// Normalized type expression.
    #[serde(rename = "type")]
    pub ty: String,
    /// Provenance.
    pub origin: PropertyOrigin,
}

impl AttributePropertyDefinition {
    /// Create a property derived from an instance member.
    pub fn instance(
        name: impl Into<String>,
        ty: impl Into<String>,
        source_location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            origin: PropertyOrigin {
                source_location: source_location.into(),
                derived_from: DerivedFrom::InstanceProperty,
            },
        }
    }
}

/// The attribute type generated for one source class.
///
/// Only the properties declared directly on the class are stored; inherited
/// properties are reachable through [`parent_class_definitions`](Self::parent_class_definitions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeClassDefinition {
    /// Generated type name (e.g., "ViewAttributes").
    pub class_name: String,
    /// Names of the parent attribute classes, nearest first.
    pub parent_class_definitions: Vec<String>,
    /// Own properties keyed by name.
    pub properties: IndexMap<String, AttributePropertyDefinition>,
    /// Source file the class is declared in.
    pub origin: String,
}

impl AttributeClassDefinition {
    /// Create an empty definition.
    pub fn new(class_name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            parent_class_definitions: Vec::new(),
            properties: IndexMap::new(),
            origin: origin.into(),
        }
    }

    /// Insert a property, replacing one with the same name.
    pub fn insert_property(&mut self, property: AttributePropertyDefinition) {
        self.properties.insert(property.name.clone(), property);
    }

    /// Get a property by name.
    pub fn property(&self, name: &str) -> Option<&AttributePropertyDefinition> {
        self.properties.get(name)
    }

    /// Properties ordered by name.
    pub fn sorted_properties(&self) -> Vec<&AttributePropertyDefinition> {
        let mut props: Vec<_> = self.properties.values().collect();
        props.sort_by(|a, b| a.name.cmp(&b.name));
        props
    }
}
