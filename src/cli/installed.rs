//! `repoman list`: installed packages.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::common::{CommandContext, OutputFormat, print_json};

/// List installed packages recorded in the user config.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ListCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let installed = ctx.catalog.installed_packages()?;

        if self.format == OutputFormat::Json {
            return print_json(&installed);
        }

        if installed.is_empty() {
            println!("No packages installed.");
            return Ok(());
        }

        for package in &installed {
            if package.exists {
                println!("{}", package.token);
            } else {
                println!("{} {}", package.token, "(missing)".yellow());
            }
        }
        Ok(())
    }
}
