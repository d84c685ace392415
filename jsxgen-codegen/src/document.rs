//! Document assembly.

use std::collections::{HashMap, hash_map::Entry};

use jsxgen_ir::{AttributeClassDefinition, Document, IntrinsicElementDefinition};
use log::{debug, info};

use crate::{
    BuildError, Result,
    aliases::ImportRegistry,
    graph::ClassGraphProvider,
    walker::{ClassGraphWalker, ClassRegistry},
};

/// Builds one self-contained declaration document from a set of root classes.
///
/// Every call starts from fresh registries, so two builds never share
/// definitions or aliases.
pub struct DocumentBuilder<'p, P> {
    provider: &'p P,
}

impl<'p, P: ClassGraphProvider> DocumentBuilder<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Build a document from root class names.
    pub fn build_named<S: AsRef<str>>(&self, roots: &[S]) -> Result<Document> {
        let classes = roots
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.provider
                    .lookup_class(name)
                    .ok_or_else(|| BuildError::UnknownRoot {
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        self.build(&classes)
    }

    /// Build a document from root classes.
    ///
    /// The output does not depend on the order of `roots`.
    pub fn build(&self, roots: &[P::Class]) -> Result<Document> {
        info!(roots = roots.len(); "Building declaration document");

        let walker = ClassGraphWalker::new(self.provider);
        let mut registry = ClassRegistry::new();
        // tag -> (class identity, attribute class)
        let mut tags: HashMap<String, (String, String)> = HashMap::new();

        for root in roots {
            let definition = walker.resolve(root, &mut registry)?;
            let tag_name = self.provider.class_name(root).to_lowercase();
            let identity = self.provider.class_identity(root);
            match tags.entry(tag_name) {
                Entry::Occupied(entry) => {
                    let (owner, _) = entry.get();
                    if *owner != identity {
                        let (existing, incoming) = if *owner < identity {
                            (owner.clone(), identity)
                        } else {
                            (identity, owner.clone())
                        };
                        return Err(BuildError::TagCollision {
                            tag: entry.key().clone(),
                            existing,
                            incoming,
                        });
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert((identity, definition.class_name.clone()));
                }
            }
        }

        let mut elements: Vec<IntrinsicElementDefinition> = tags
            .into_iter()
            .map(|(tag_name, (_, attribute_class))| IntrinsicElementDefinition {
                tag_name,
                attribute_class,
            })
            .collect();

        let mut classes = registry.into_definitions();
        classes.sort_by(|a, b| a.class_name.cmp(&b.class_name));

        let mut imports = ImportRegistry::new();
        let classes = classes
            .into_iter()
            .map(|class| alias_class(class, &mut imports))
            .collect::<Result<Vec<_>>>()?;

        elements.sort_by(|a, b| a.tag_name.cmp(&b.tag_name));

        debug!(
            classes = classes.len(),
            imports = imports.len(),
            elements = elements.len();
            "Assembled document"
        );

        Ok(Document {
            imports: imports.into_imports(),
            class_definitions: classes,
            intrinsic_elements: elements,
        })
    }
}

/// Rewrite property types through the alias registry, visiting properties
/// by name.
fn alias_class(
    mut class: AttributeClassDefinition,
    imports: &mut ImportRegistry,
) -> Result<AttributeClassDefinition> {
    class.properties.sort_keys();
    for property in class.properties.values_mut() {
        property.ty = imports.rewrite(&property.ty)?;
    }
    Ok(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing::FakeProvider;

    #[test]
    fn test_single_widget() {
        let provider = FakeProvider::default().class(
            "m/widget",
            "Widget",
            None,
            &[
                ("label", "string"),
                ("tap", "(e: import(\"m/ev\").EventData) => void"),
            ],
        );
        let doc = DocumentBuilder::new(&provider)
            .build_named(&["Widget"])
            .unwrap();

        assert_eq!(doc.class_definitions.len(), 1);
        let widget = &doc.class_definitions[0];
        assert_eq!(widget.class_name, "WidgetAttributes");
        assert!(widget.parent_class_definitions.is_empty());
        assert_eq!(widget.property("label").unwrap().ty, "string");
        assert_eq!(widget.property("tap").unwrap().ty, "(e: EventData) => void");

        assert_eq!(doc.intrinsic_elements.len(), 1);
        assert_eq!(doc.intrinsic_elements[0].tag_name, "widget");
        assert_eq!(doc.intrinsic_elements[0].attribute_class, "WidgetAttributes");

        assert_eq!(doc.imports.len(), 1);
        assert_eq!(doc.imports[0].alias, "EventData");
        assert_eq!(doc.imports[0].module_path, "m/ev");
    }

    #[test]
    fn test_base_and_child() {
        let provider = FakeProvider::default()
            .class("m/base", "Base", None, &[("a", "number")])
            .class("m/child", "Child", Some("Base"), &[("b", "string")]);
        let doc = DocumentBuilder::new(&provider)
            .build_named(&["Child"])
            .unwrap();

        let names: Vec<_> = doc
            .class_definitions
            .iter()
            .map(|c| c.class_name.as_str())
            .collect();
        assert_eq!(names, vec!["BaseAttributes", "ChildAttributes"]);
        assert_eq!(
            doc.class("ChildAttributes").unwrap().parent_class_definitions,
            vec!["BaseAttributes"]
        );
        // Only the requested root becomes an element
        assert_eq!(doc.intrinsic_elements.len(), 1);
        assert_eq!(doc.intrinsic_elements[0].tag_name, "child");
    }

    #[test]
    fn test_shared_import_is_aliased_once() {
        let foo = "import(\"m/foo\").Foo";
        let provider = FakeProvider::default()
            .class("m/a", "A", None, &[("x", foo)])
            .class("m/b", "B", None, &[("y", foo), ("z", "import(\"n/foo\").Foo")]);
        let doc = DocumentBuilder::new(&provider)
            .build_named(&["A", "B"])
            .unwrap();

        let a = doc.class("AAttributes").unwrap();
        let b = doc.class("BAttributes").unwrap();
        assert_eq!(a.property("x").unwrap().ty, "Foo");
        assert_eq!(b.property("y").unwrap().ty, "Foo");
        assert_eq!(b.property("z").unwrap().ty, "FooFoo");

        let aliases: Vec<_> = doc.imports.iter().map(|i| i.alias.as_str()).collect();
        assert_eq!(aliases, vec!["Foo", "FooFoo"]);
        assert_eq!(doc.alias_for("m/foo", "Foo"), Some("Foo"));
    }

    #[test]
    fn test_output_independent_of_root_order() {
        let provider = FakeProvider::default()
            .class("m/base", "Base", None, &[("color", "import(\"x/color\").Color")])
            .class("m/a", "A", Some("Base"), &[("color", "import(\"y/color\").Color")])
            .class("m/b", "B", Some("Base"), &[("size", "number")]);
        let builder = DocumentBuilder::new(&provider);

        let forward = builder.build_named(&["A", "B"]).unwrap();
        let backward = builder.build_named(&["B", "A"]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_duplicate_roots_produce_one_element() {
        let provider = FakeProvider::default().class("m/w", "Widget", None, &[]);
        let doc = DocumentBuilder::new(&provider)
            .build_named(&["Widget", "Widget"])
            .unwrap();

        assert_eq!(doc.class_definitions.len(), 1);
        assert_eq!(doc.intrinsic_elements.len(), 1);
    }

    #[test]
    fn test_same_tag_from_distinct_classes() {
        let provider = FakeProvider::default()
            .class("m/list", "ListView", None, &[("items", "number")])
            .class("m/legacy", "Listview", None, &[("rows", "number")]);
        let builder = DocumentBuilder::new(&provider);

        let forward = builder.build_named(&["ListView", "Listview"]).unwrap_err();
        let backward = builder.build_named(&["Listview", "ListView"]).unwrap_err();
        assert_eq!(
            forward,
            BuildError::TagCollision {
                tag: "listview".to_string(),
                existing: "m/legacy#Listview".to_string(),
                incoming: "m/list#ListView".to_string(),
            }
        );
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_distinct_tags_each_get_an_element() {
        let provider = FakeProvider::default()
            .class("m/base", "Base", None, &[])
            .class("m/a", "A", Some("Base"), &[])
            .class("m/b", "B", Some("Base"), &[]);
        let builder = DocumentBuilder::new(&provider);

        let forward = builder.build_named(&["B", "A", "Base"]).unwrap();
        let backward = builder.build_named(&["Base", "A", "B"]).unwrap();
        let tags: Vec<_> = forward
            .intrinsic_elements
            .iter()
            .map(|e| (e.tag_name.as_str(), e.attribute_class.as_str()))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("a", "AAttributes"),
                ("b", "BAttributes"),
                ("base", "BaseAttributes"),
            ]
        );
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_no_import_syntax_left() {
        let provider = FakeProvider::default().class(
            "m/w",
            "Widget",
            None,
            &[
                ("items", "Array<import(\"m/item\").Item>"),
                ("color", "string | import(\"m/color\").Color"),
            ],
        );
        let doc = DocumentBuilder::new(&provider)
            .build_named(&["Widget"])
            .unwrap();

        for class in &doc.class_definitions {
            for property in class.properties.values() {
                assert!(!property.ty.contains("import("), "{}", property.ty);
            }
        }
        for import in &doc.imports {
            assert!(
                doc.class_definitions
                    .iter()
                    .flat_map(|c| c.properties.values())
                    .any(|p| jsxgen_ir::references_identifier(&p.ty, &import.alias))
            );
        }
    }

    #[test]
    fn test_unknown_root() {
        let provider = FakeProvider::default();
        let err = DocumentBuilder::new(&provider)
            .build_named(&["Ghost"])
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownRoot {
                name: "Ghost".to_string()
            }
        );
    }
}
