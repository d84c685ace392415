//! Class-graph walker.

use std::collections::HashMap;

use indexmap::IndexMap;
use jsxgen_core::attribute_class_name;
use jsxgen_ir::{AttributeClassDefinition, AttributePropertyDefinition};
use log::debug;

use crate::{
    BuildError, Result,
    graph::{ClassGraphProvider, Visibility},
    normalize::TypeNormalizer,
};

/// Attribute class definitions produced during one build, keyed by
/// attribute class name.
///
/// A name is claimed by a class identity before its ancestors are resolved,
/// so a claimed name without a definition means the class is still being
/// walked.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    definitions: IndexMap<String, AttributeClassDefinition>,
    owners: HashMap<String, String>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, class_name: &str) -> Option<&AttributeClassDefinition> {
        self.definitions.get(class_name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in resolution order (ancestors before descendants).
    pub fn definitions(&self) -> impl Iterator<Item = &AttributeClassDefinition> {
        self.definitions.values()
    }

    pub fn into_definitions(self) -> Vec<AttributeClassDefinition> {
        self.definitions.into_values().collect()
    }
}

/// Converts classes into attribute class definitions.
pub struct ClassGraphWalker<'p, P> {
    provider: &'p P,
    normalizer: TypeNormalizer<'p, P>,
}

impl<'p, P: ClassGraphProvider> ClassGraphWalker<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self {
            provider,
            normalizer: TypeNormalizer::new(provider),
        }
    }

    /// Resolve a class and, first, its ancestors.
    ///
    /// Returns the existing definition when the class was already resolved
    /// into `registry`.
    pub fn resolve<'r>(
        &self,
        class: &P::Class,
        registry: &'r mut ClassRegistry,
    ) -> Result<&'r AttributeClassDefinition> {
        let key = self.resolve_key(class, registry)?;
        Ok(&registry.definitions[&key])
    }

    fn resolve_key(&self, class: &P::Class, registry: &mut ClassRegistry) -> Result<String> {
        let name = self.provider.class_name(class);
        let class_name = attribute_class_name(&name);
        let identity = self.provider.class_identity(class);

        if let Some(owner) = registry.owners.get(&class_name) {
            if *owner != identity {
                return Err(BuildError::NameCollision {
                    class_name,
                    existing: owner.clone(),
                    incoming: identity,
                });
            }
            if registry.definitions.contains_key(&class_name) {
                return Ok(class_name);
            }
            return Err(BuildError::CyclicInheritance { class: name });
        }
        registry.owners.insert(class_name.clone(), identity);

        let mut definition =
            AttributeClassDefinition::new(&class_name, self.provider.source_location(class));

        match self.provider.direct_ancestor(class) {
            Ok(Some(ancestor)) => {
                let parent = self.resolve_key(&ancestor, registry)?;
                definition.parent_class_definitions.push(parent);
            }
            Ok(None) => {}
            Err(missing) => {
                return Err(BuildError::UnresolvableAncestor {
                    class: name,
                    ancestor: missing.name,
                });
            }
        }

        for member in self.provider.instance_members(class) {
            if member.visibility != Visibility::Public || member.name.starts_with('_') {
                continue;
            }
            let ty = self
                .normalizer
                .normalize(&member.ty, member.has_declaration_site)
                .map_err(|e| BuildError::UnrepresentableType {
                    class: name.clone(),
                    member: member.name.clone(),
                    reason: e.reason,
                })?;
            definition.insert_property(AttributePropertyDefinition::instance(
                member.name,
                ty,
                member.source,
            ));
        }

        debug!(
            class_name = class_name.as_str(),
            properties = definition.properties.len();
            "Resolved attribute class"
        );
        registry.definitions.insert(class_name.clone(), definition);
        Ok(class_name)
    }
}
