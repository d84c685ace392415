use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use jsxgen_manifest::JsxToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to jsxgen.toml (defaults to ./jsxgen.toml)
    #[arg(short, long, default_value = "jsxgen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Annotate every property with where it was declared
    #[arg(long)]
    pub debug: bool,

    /// Write each assembled document as JSON under .jsxgen/debug
    #[arg(long)]
    pub dump: bool,

    /// Only generate the named export
    #[arg(long, value_name = "EXPORT")]
    pub only: Option<String>,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let jsx_toml = JsxToml::open(&self.config).unwrap_or_exit();

        let report = ops::bake(
            jsx_toml.manifest(),
            BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                debug: self.debug,
                dump: self.dump,
                only: self.only.clone(),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
