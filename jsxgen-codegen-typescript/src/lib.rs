//! TypeScript declaration renderers for jsxgen.
//!
//! Renders assembled [`Document`](jsxgen_ir::Document)s in two dialects:
//!
//! - ambient (`*.d.ts`): attribute types plus a global
//!   `declare namespace JSX { interface IntrinsicElements { ... } }` block
//! - exported (`*.ts`): `export type` attribute types, optionally followed
//!   by a `registerElement(...)` scaffold
//!
//! # Usage
//!
//! ```ignore
//! use jsxgen_codegen_typescript::Generator;
//! use jsxgen_manifest::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::from_file("jsxgen.toml")?;
//! let generator = Generator::new(&manifest);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```

mod code_file;
mod generator;
mod renderer;

pub mod ast;

pub use code_file::DeclarationFile;
pub use generator::{DEBUG_DIR, ExportBuild, GenerateOptions, GenerateResult, Generator};
pub use renderer::{AmbientRenderer, DeclarationRenderer, ExportedRenderer, RenderOptions};
