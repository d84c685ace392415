//! Class-graph manifest (`jsxgen.toml`) parsing and validation.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod type_expr;

pub use error::{Error, Result, SourceContext};
pub use manifest::*;
pub use type_expr::{Field, GLOBAL_TYPES, KEYWORDS, Param, TypeExpr, TypeSyntaxError, parse_type};
