//! `repoman show <package>`: package details.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::common::{CommandContext, OutputFormat, print_json};

/// Show details of one package.
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Package token: `name` for the stable repository or `repo:name`
    package: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ShowCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let info = ctx.catalog.find_package(&self.package)?;

        if self.format == OutputFormat::Json {
            return print_json(&info);
        }

        println!("{}", info.token.bold());
        if !info.synopsis.is_empty() {
            println!("  {}", info.synopsis);
        }
        println!("  Path:       {}", info.path.display());
        println!("  Repository: {}", info.repository_path.display());
        println!(
            "  Installed:  {}",
            if info.installed { "yes".green() } else { "no".yellow() }
        );
        Ok(())
    }
}
