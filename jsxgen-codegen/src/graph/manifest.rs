//! Class-graph provider backed by a `jsxgen.toml` manifest.

use std::{cell::RefCell, collections::HashMap};

use jsxgen_core::string_literal_end;
use jsxgen_manifest::{ClassDecl, GLOBAL_TYPES, Manifest, TypeExpr, TypeKind};

use super::{
    ClassGraphProvider, FormatMode, MemberInfo, MissingAncestor, TypeShape, Unrepresentable,
    Visibility,
};

/// Alias chains longer than this are treated as circular.
const MAX_ALIAS_DEPTH: usize = 64;

/// Longest text an alias may expand to.
const MAX_EXPANSION_LEN: usize = 64 * 1024;

/// A member type together with the class it was declared on.
///
/// The owner scopes type parameter names.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestType {
    pub expr: TypeExpr,
    pub owner: Option<String>,
}

impl ManifestType {
    pub fn new(expr: TypeExpr, owner: Option<String>) -> Self {
        Self { expr, owner }
    }

    fn with_expr(&self, expr: TypeExpr) -> Self {
        Self {
            expr,
            owner: self.owner.clone(),
        }
    }
}

/// Provider over the classes and types declared in a manifest.
///
/// Classes are referred to by their declared name. Each alias is expanded at
/// most once per provider.
pub struct ManifestProvider<'m> {
    manifest: &'m Manifest,
    expanded: RefCell<HashMap<String, Result<String, Unrepresentable>>>,
    expanding: RefCell<Vec<String>>,
}

impl<'m> ManifestProvider<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            expanded: RefCell::default(),
            expanding: RefCell::default(),
        }
    }

    pub fn manifest(&self) -> &'m Manifest {
        self.manifest
    }

    fn decl(&self, class: &str) -> Option<&'m ClassDecl> {
        self.manifest.class(class)
    }

    fn is_type_param(&self, owner: Option<&str>, name: &str) -> bool {
        owner
            .and_then(|o| self.decl(o))
            .is_some_and(|c| c.has_type_param(name))
    }

    /// Follow aliases until a non-alias expression is reached.
    fn resolve_aliases<'e>(&self, mut expr: &'e TypeExpr) -> Option<&'e TypeExpr>
    where
        'm: 'e,
    {
        for _ in 0..MAX_ALIAS_DEPTH {
            match expr {
                TypeExpr::Named { name, .. } => match self.manifest.type_decl(name) {
                    Some(decl) if decl.kind == TypeKind::Alias => match &decl.target {
                        Some(target) => expr = target,
                        None => return Some(expr),
                    },
                    _ => return Some(expr),
                },
                _ => return Some(expr),
            }
        }
        None
    }

    fn print(
        &self,
        expr: &TypeExpr,
        owner: Option<&str>,
        mode: FormatMode,
    ) -> Result<String, Unrepresentable> {
        match expr {
            TypeExpr::Keyword(k) => Ok(k.clone()),
            TypeExpr::Literal(l) => Ok(l.clone()),
            TypeExpr::This => Err(Unrepresentable::new("the polymorphic 'this' type")),
            TypeExpr::Named { name, args } => self.print_named(name, args, owner, mode),
            TypeExpr::Array(inner) => {
                let text = self.print(inner, owner, mode)?;
                if needs_parens(&text) {
                    Ok(format!("({})[]", text))
                } else {
                    Ok(format!("{}[]", text))
                }
            }
            TypeExpr::Union(members) => {
                let parts = members
                    .iter()
                    .map(|m| {
                        let text = self.print(m, owner, mode)?;
                        Ok(if text.contains("=>") {
                            format!("({})", text)
                        } else {
                            text
                        })
                    })
                    .collect::<Result<Vec<_>, Unrepresentable>>()?;
                Ok(parts.join(" | "))
            }
            TypeExpr::Function { params, ret } => {
                let params = params
                    .iter()
                    .map(|p| {
                        Ok(format!(
                            "{}{}{}: {}",
                            if p.rest { "..." } else { "" },
                            p.name,
                            if p.optional { "?" } else { "" },
                            self.print(&p.ty, owner, mode)?
                        ))
                    })
                    .collect::<Result<Vec<_>, Unrepresentable>>()?;
                let ret = self.print(ret, owner, mode)?;
                Ok(format!("({}) => {}", params.join(", "), ret))
            }
            TypeExpr::Object(fields) => {
                if fields.is_empty() {
                    return Ok("{}".to_string());
                }
                let mut out = String::from("{ ");
                for field in fields {
                    out.push_str(&field.name);
                    if field.optional {
                        out.push('?');
                    }
                    out.push_str(": ");
                    out.push_str(&self.print(&field.ty, owner, mode)?);
                    out.push_str("; ");
                }
                out.push('}');
                Ok(out)
            }
        }
    }

    /// In-declaration text of an alias, expanded once and cached by name.
    fn expand_alias(&self, name: &str, target: &TypeExpr) -> Result<String, Unrepresentable> {
        if let Some(done) = self.expanded.borrow().get(name) {
            return done.clone();
        }
        if self.expanding.borrow().iter().any(|n| n == name) {
            return Err(Unrepresentable::new("circular type alias"));
        }

        self.expanding.borrow_mut().push(name.to_string());
        let result = self
            .print(target, None, FormatMode::InDeclaration)
            .and_then(|text| {
                if text.len() > MAX_EXPANSION_LEN {
                    Err(Unrepresentable::new(format!(
                        "type alias '{}' expands to more than {} bytes",
                        name, MAX_EXPANSION_LEN
                    )))
                } else {
                    Ok(text)
                }
            });
        self.expanding.borrow_mut().pop();

        self.expanded
            .borrow_mut()
            .insert(name.to_string(), result.clone());
        result
    }

    fn print_named(
        &self,
        name: &str,
        args: &[TypeExpr],
        owner: Option<&str>,
        mode: FormatMode,
    ) -> Result<String, Unrepresentable> {
        if self.is_type_param(owner, name) {
            return Err(Unrepresentable::new(format!("type parameter '{}'", name)));
        }

        let head = name.split('.').next().unwrap_or(name);
        let module = if let Some(class) = self.manifest.class(head) {
            Some(&class.module)
        } else if let Some(decl) = self.manifest.type_decl(head) {
            if mode == FormatMode::InDeclaration && decl.kind == TypeKind::Alias && head == name {
                if let Some(target) = &decl.target {
                    return self.expand_alias(name, target);
                }
            }
            Some(&decl.module)
        } else if GLOBAL_TYPES.contains(&head) {
            None
        } else {
            return Err(Unrepresentable::new(format!("unknown type '{}'", name)));
        };

        let mut out = match module {
            Some(module) => format!("import(\"{}\").{}", module, name),
            None => name.to_string(),
        };
        if !args.is_empty() {
            let args = args
                .iter()
                .map(|a| self.print(a, owner, mode))
                .collect::<Result<Vec<_>, Unrepresentable>>()?;
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        Ok(out)
    }
}

impl ClassGraphProvider for ManifestProvider<'_> {
    type Class = String;
    type Type = ManifestType;

    fn lookup_class(&self, name: &str) -> Option<String> {
        self.manifest.classes.contains_key(name).then(|| name.to_string())
    }

    fn class_name(&self, class: &String) -> String {
        class.clone()
    }

    fn class_identity(&self, class: &String) -> String {
        match self.decl(class) {
            Some(decl) => format!("{}#{}", decl.module, class),
            None => class.clone(),
        }
    }

    fn source_location(&self, class: &String) -> String {
        self.decl(class)
            .map(ClassDecl::source_location)
            .unwrap_or_default()
    }

    fn direct_ancestor(&self, class: &String) -> Result<Option<String>, MissingAncestor> {
        let Some(extends) = self.decl(class).and_then(|c| c.extends.as_ref()) else {
            return Ok(None);
        };
        self.lookup_class(extends)
            .map(Some)
            .ok_or_else(|| MissingAncestor {
                name: extends.clone(),
            })
    }

    fn instance_members(&self, class: &String) -> Vec<MemberInfo<ManifestType>> {
        let Some(decl) = self.decl(class) else {
            return Vec::new();
        };
        let source = decl.source_location();

        decl.members
            .iter()
            .filter(|(_, member)| !member.is_static)
            .map(|(name, member)| MemberInfo {
                name: name.clone(),
                visibility: match member.visibility {
                    jsxgen_manifest::Visibility::Public => Visibility::Public,
                    jsxgen_manifest::Visibility::Protected => Visibility::Protected,
                    jsxgen_manifest::Visibility::Private => Visibility::Private,
                },
                ty: ManifestType::new(member.ty.clone(), Some(class.clone())),
                source: source.clone(),
                has_declaration_site: true,
            })
            .collect()
    }

    fn type_shape(&self, ty: &ManifestType) -> TypeShape<ManifestType> {
        let Some(resolved) = self.resolve_aliases(&ty.expr) else {
            return TypeShape::Other;
        };

        match resolved {
            TypeExpr::Union(members) => {
                TypeShape::Union(members.iter().map(|m| ty.with_expr(m.clone())).collect())
            }
            TypeExpr::Array(_) | TypeExpr::Function { .. } | TypeExpr::Object(_) => {
                TypeShape::Structured
            }
            TypeExpr::Named { name, .. } => {
                if self.is_type_param(ty.owner.as_deref(), name) {
                    return TypeShape::Other;
                }
                let head = name.split('.').next().unwrap_or(name);
                if self.manifest.class(head).is_some() {
                    return TypeShape::Structured;
                }
                match self.manifest.type_decl(head).map(|d| d.kind) {
                    Some(TypeKind::Class | TypeKind::Interface) => TypeShape::Structured,
                    None if GLOBAL_TYPES.contains(&head) => TypeShape::Structured,
                    _ => TypeShape::Other,
                }
            }
            TypeExpr::Keyword(_) | TypeExpr::Literal(_) | TypeExpr::This => TypeShape::Other,
        }
    }

    fn print_type(&self, ty: &ManifestType, mode: FormatMode) -> Result<String, Unrepresentable> {
        self.print(&ty.expr, ty.owner.as_deref(), mode)
    }
}

/// Whether printed type text needs parentheses before an array suffix.
fn needs_parens(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                i = string_literal_end(text, i);
                continue;
            }
            b'(' | b'<' | b'{' | b'[' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'=' => {
                if depth == 0 {
                    return true;
                }
            }
            b')' | b'>' | b'}' | b']' => depth = depth.saturating_sub(1),
            b'|' if depth == 0 => return true,
            _ => {}
        }
        i += 1;
    }

    false
}
