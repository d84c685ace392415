//! Declaration syntax nodes.
//!
//! Each node implements [`Renderable`](jsxgen_codegen::builder::Renderable)
//! and is emitted through a `CodeBuilder`.

mod attributes;
mod imports;
mod namespace;
mod registration;

pub use attributes::{AttributeType, Property};
pub use imports::TypeImport;
pub use namespace::IntrinsicElements;
pub use registration::Registration;
