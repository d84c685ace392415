use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use jsxgen_manifest::JsxToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to jsxgen.toml (defaults to ./jsxgen.toml)
    #[arg(short, long, default_value = "jsxgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let jsx_toml = JsxToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(jsx_toml.manifest(), &self.config)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
