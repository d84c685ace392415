//! Type expressions used in member declarations.
//!
//! Members are declared with a TypeScript-like syntax:
//!
//! ```text
//! string | number | LengthDipUnit
//! (args: PropertyChangeData) => void
//! ObservableArray<Span>[]
//! { x: number; y?: number }
//! ```
//!
//! Named types are kept unresolved here; the class-graph provider resolves
//! them against the manifest's classes and types when printing.

use std::fmt;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{all_consuming, cut, map, opt, recognize},
    error::{VerboseError, context, convert_error},
    multi::{many0, many0_count, separated_list0, separated_list1},
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

/// Keyword types that print as themselves.
pub const KEYWORDS: &[&str] = &[
    "any",
    "bigint",
    "boolean",
    "never",
    "null",
    "number",
    "object",
    "string",
    "symbol",
    "undefined",
    "unknown",
    "void",
];

/// Global generic types that need no declaration.
pub const GLOBAL_TYPES: &[&str] = &[
    "Array",
    "Date",
    "Error",
    "Function",
    "Map",
    "Partial",
    "Promise",
    "ReadonlyArray",
    "Record",
    "RegExp",
    "Set",
];

/// A parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A keyword type such as `string` or `void`.
    Keyword(String),
    /// A literal type, kept as written (`"auto"`, `42`, `true`).
    Literal(String),
    /// A reference to a class, interface, enum, alias or type parameter.
    Named { name: String, args: Vec<TypeExpr> },
    /// `T[]`
    Array(Box<TypeExpr>),
    /// `A | B | C`, never nested and never with fewer than two members.
    Union(Vec<TypeExpr>),
    /// `(a: A, b?: B) => R`
    Function { params: Vec<Param>, ret: Box<TypeExpr> },
    /// `{ a: A; b?: B }`
    Object(Vec<Field>),
    /// The polymorphic `this` type.
    This,
}

/// A function type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
    pub rest: bool,
}

/// A property of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
}

impl TypeExpr {
    /// Create a named reference without type arguments.
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Whether this is a function type.
    pub fn is_function(&self) -> bool {
        matches!(self, TypeExpr::Function { .. })
    }

    /// Visit every named reference, including ones nested in arguments.
    pub fn for_each_name<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            TypeExpr::Keyword(_) | TypeExpr::Literal(_) | TypeExpr::This => {}
            TypeExpr::Named { name, args } => {
                f(name);
                for arg in args {
                    arg.for_each_name(f);
                }
            }
            TypeExpr::Array(inner) => inner.for_each_name(f),
            TypeExpr::Union(members) => {
                for member in members {
                    member.for_each_name(f);
                }
            }
            TypeExpr::Function { params, ret } => {
                for param in params {
                    param.ty.for_each_name(f);
                }
                ret.for_each_name(f);
            }
            TypeExpr::Object(fields) => {
                for field in fields {
                    field.ty.for_each_name(f);
                }
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Keyword(k) => write!(f, "{}", k),
            TypeExpr::Literal(l) => write!(f, "{}", l),
            TypeExpr::This => write!(f, "this"),
            TypeExpr::Named { name, args } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                    write!(f, "<{}>", args.join(", "))?;
                }
                Ok(())
            }
            TypeExpr::Array(inner) => match inner.as_ref() {
                TypeExpr::Union(_) | TypeExpr::Function { .. } => write!(f, "({})[]", inner),
                _ => write!(f, "{}[]", inner),
            },
            TypeExpr::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    if member.is_function() {
                        write!(f, "({})", member)?;
                    } else {
                        write!(f, "{}", member)?;
                    }
                }
                Ok(())
            }
            TypeExpr::Function { params, ret } => {
                let params: Vec<String> = params
                    .iter()
                    .map(|p| {
                        format!(
                            "{}{}{}: {}",
                            if p.rest { "..." } else { "" },
                            p.name,
                            if p.optional { "?" } else { "" },
                            p.ty
                        )
                    })
                    .collect();
                write!(f, "({}) => {}", params.join(", "), ret)
            }
            TypeExpr::Object(fields) => {
                if fields.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for field in fields {
                    write!(
                        f,
                        "{}{}: {}; ",
                        field.name,
                        if field.optional { "?" } else { "" },
                        field.ty
                    )?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Error produced when a type expression cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSyntaxError {
    /// The offending source text.
    pub input: String,
    /// Parser trace.
    pub message: String,
}

impl fmt::Display for TypeSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid type expression '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for TypeSyntaxError {}

impl std::str::FromStr for TypeExpr {
    type Err = TypeSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}

/// Parse a complete type expression.
pub fn parse_type(input: &str) -> Result<TypeExpr, TypeSyntaxError> {
    match all_consuming(ws(union_type))(input) {
        Ok((_, ty)) => Ok(ty),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(TypeSyntaxError {
            input: input.to_string(),
            message: convert_error(input, e).trim().to_string(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(TypeSyntaxError {
            input: input.to_string(),
            message: "unexpected end of input".to_string(),
        }),
    }
}

type PResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

fn ws<'a, O>(
    inner: impl FnMut(&'a str) -> PResult<'a, O>,
) -> impl FnMut(&'a str) -> PResult<'a, O> {
    delimited(multispace0, inner, multispace0)
}

fn symbol<'a>(s: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    ws(tag(s))
}

fn identifier(input: &str) -> PResult<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"), tag("$"))),
        many0_count(alt((alphanumeric1, tag("_"), tag("$")))),
    ))(input)
}

fn union_type(input: &str) -> PResult<'_, TypeExpr> {
    map(
        preceded(opt(symbol("|")), separated_list1(symbol("|"), postfix_type)),
        |members| {
            let mut flat = Vec::with_capacity(members.len());
            for member in members {
                match member {
                    TypeExpr::Union(inner) => flat.extend(inner),
                    other => flat.push(other),
                }
            }
            if flat.len() == 1 {
                flat.remove(0)
            } else {
                TypeExpr::Union(flat)
            }
        },
    )(input)
}

fn postfix_type(input: &str) -> PResult<'_, TypeExpr> {
    let (input, base) = ws(primary_type)(input)?;
    let (input, dims) = many0_count(pair(symbol("["), symbol("]")))(input)?;
    let ty = (0..dims).fold(base, |ty, _| TypeExpr::Array(Box::new(ty)));
    Ok((input, ty))
}

fn primary_type(input: &str) -> PResult<'_, TypeExpr> {
    alt((
        context("function type", function_type),
        context("parenthesized type", delimited(symbol("("), union_type, symbol(")"))),
        context("object type", object_type),
        context("literal type", literal_type),
        context("named type", named_type),
    ))(input)
}

fn function_type(input: &str) -> PResult<'_, TypeExpr> {
    map(
        pair(
            delimited(symbol("("), separated_list0(symbol(","), param), symbol(")")),
            preceded(symbol("=>"), cut(union_type)),
        ),
        |(params, ret)| TypeExpr::Function {
            params,
            ret: Box::new(ret),
        },
    )(input)
}

fn param(input: &str) -> PResult<'_, Param> {
    map(
        tuple((
            opt(symbol("...")),
            ws(identifier),
            opt(symbol("?")),
            preceded(symbol(":"), union_type),
        )),
        |(rest, name, optional, ty)| Param {
            name: name.to_string(),
            ty,
            optional: optional.is_some(),
            rest: rest.is_some(),
        },
    )(input)
}

fn object_type(input: &str) -> PResult<'_, TypeExpr> {
    map(
        delimited(
            symbol("{"),
            many0(terminated(field, opt(alt((symbol(";"), symbol(",")))))),
            symbol("}"),
        ),
        TypeExpr::Object,
    )(input)
}

fn field(input: &str) -> PResult<'_, Field> {
    map(
        tuple((
            ws(identifier),
            opt(symbol("?")),
            preceded(symbol(":"), cut(union_type)),
        )),
        |(name, optional, ty)| Field {
            name: name.to_string(),
            ty,
            optional: optional.is_some(),
        },
    )(input)
}

fn literal_type(input: &str) -> PResult<'_, TypeExpr> {
    alt((
        map(
            alt((
                delimited(char('"'), take_while(|c| c != '"'), char('"')),
                delimited(char('\''), take_while(|c| c != '\''), char('\'')),
            )),
            |s: &str| TypeExpr::Literal(format!("\"{}\"", s)),
        ),
        map(recognize_float, |n: &str| TypeExpr::Literal(n.to_string())),
    ))(input)
}

fn named_type(input: &str) -> PResult<'_, TypeExpr> {
    let (input, name) = recognize(pair(
        identifier,
        many0_count(pair(char('.'), identifier)),
    ))(input)?;

    match name {
        "this" => return Ok((input, TypeExpr::This)),
        "true" | "false" => return Ok((input, TypeExpr::Literal(name.to_string()))),
        _ if KEYWORDS.contains(&name) => return Ok((input, TypeExpr::Keyword(name.to_string()))),
        _ => {}
    }

    let (input, args) = opt(delimited(
        symbol("<"),
        separated_list1(symbol(","), union_type),
        cut(symbol(">")),
    ))(input)?;

    Ok((
        input,
        TypeExpr::Named {
            name: name.to_string(),
            args: args.unwrap_or_default(),
        },
    ))
}
