//! `repoman avail`: packages available from subscribed repositories.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::catalog::CatalogEntry;
use crate::cli::common::{CommandContext, OutputFormat, print_json};

/// List packages from the indices of subscribed repositories.
#[derive(Args, Debug)]
pub struct AvailCommand {
    /// Only list packages of this repository (need not be subscribed)
    #[arg(short, long, value_name = "NAME")]
    repo: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl AvailCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let entries = match &self.repo {
            Some(repo) => ctx.catalog.repo_packages(repo)?,
            None => ctx.catalog.packages()?,
        };

        match self.format {
            OutputFormat::Json => print_json(&entries),
            OutputFormat::Text => {
                print_entries(&entries);
                Ok(())
            }
        }
    }
}

fn print_entries(entries: &[CatalogEntry]) {
    if entries.is_empty() {
        println!("No packages available.");
        return;
    }

    let width = entries.iter().map(|e| e.token.len()).max().unwrap_or(0);
    for entry in entries {
        if entry.record.synopsis.is_empty() {
            println!("{}", entry.token);
        } else {
            println!(
                "{:<width$}  {}",
                entry.token,
                entry.record.synopsis.dimmed(),
                width = width
            );
        }
    }
}
