//! Member type normalization.

use crate::graph::{ClassGraphProvider, FormatMode, TypeShape, Unrepresentable};

/// Turns a member type into declaration text.
///
/// Unions are inlined member by member so each alternative keeps its own
/// `import("...")` reference; function members are parenthesized so the
/// union binds correctly. Structured types and types without a declaration
/// site are printed canonically, everything else is expanded.
pub struct TypeNormalizer<'p, P> {
    provider: &'p P,
}

impl<'p, P: ClassGraphProvider> TypeNormalizer<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    pub fn normalize(
        &self,
        ty: &P::Type,
        has_declaration_site: bool,
    ) -> Result<String, Unrepresentable> {
        self.normalize_with(ty, has_declaration_site, true)
    }

    fn normalize_with(
        &self,
        ty: &P::Type,
        has_declaration_site: bool,
        expand_unions: bool,
    ) -> Result<String, Unrepresentable> {
        let shape = self.provider.type_shape(ty);

        if let (true, TypeShape::Union(members)) = (expand_unions, &shape) {
            let parts = members
                .iter()
                .map(|member| {
                    let text = self.normalize_with(member, false, false)?;
                    Ok(if text.contains("=>") {
                        format!("({})", text)
                    } else {
                        text
                    })
                })
                .collect::<Result<Vec<_>, Unrepresentable>>()?;
            return Ok(parts.join(" | "));
        }

        let mode = match shape {
            TypeShape::Structured => FormatMode::Canonical,
            _ if !has_declaration_site => FormatMode::Canonical,
            _ => FormatMode::InDeclaration,
        };
        self.provider.print_type(ty, mode)
    }
}
