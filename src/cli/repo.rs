//! Repository subscription commands.
//!
//! # Examples
//!
//! ```bash
//! repoman repo add alice            # subscribe to /home/alice/repoman
//! repoman repo add /srv/shared/pkgs # subscribe by path
//! repoman repo remove alice
//! repoman repo list
//! repoman repo paths
//! repoman repo path alice
//! repoman repo show alice --format json
//! repoman repo index alice          # rebuild the package index
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::catalog::RepoSummary;
use crate::cli::common::{CommandContext, OutputFormat, print_json};
use crate::core::RepomanError;
use crate::utils::fs::is_existing_dir;
use crate::utils::progress::Spinner;

/// Manage repository subscriptions.
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    command: RepoSubcommands,
}

#[derive(Subcommand, Debug)]
enum RepoSubcommands {
    /// Subscribe to a repository by name or absolute path
    Add {
        /// Repository name or absolute path
        name: String,
    },

    /// Unsubscribe from a repository
    Remove {
        /// Repository identifier as it was added
        name: String,
    },

    /// List subscribed repositories
    List,

    /// List subscribed repositories with their resolved paths
    Paths,

    /// Print the path a repository identifier resolves to
    Path {
        /// Repository name or absolute path (stable repository if omitted)
        name: Option<String>,
    },

    /// Show a repository summary
    Show {
        /// Repository name or absolute path (stable repository if omitted)
        name: Option<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Rebuild a repository's package index
    Index {
        /// Repository name or absolute path (stable repository if omitted)
        name: Option<String>,
    },
}

impl RepoCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        match self.command {
            RepoSubcommands::Add {
                name,
            } => add(ctx, &name),
            RepoSubcommands::Remove {
                name,
            } => remove(ctx, &name),
            RepoSubcommands::List => list(ctx),
            RepoSubcommands::Paths => paths(ctx),
            RepoSubcommands::Path {
                name,
            } => {
                let path = ctx.catalog.repo_path(name.as_deref().unwrap_or_default());
                println!("{}", path.display());
                Ok(())
            }
            RepoSubcommands::Show {
                name,
                format,
            } => show(ctx, &ctx.repo_or_stable(name), format),
            RepoSubcommands::Index {
                name,
            } => index(ctx, &ctx.repo_or_stable(name)),
        }
    }
}

fn add(ctx: &CommandContext, name: &str) -> Result<()> {
    ctx.catalog.add_subscription(name)?;
    println!(
        "{} Subscribed to '{}' ({})",
        "✓".green(),
        name.bold(),
        ctx.catalog.repo_path(name).display()
    );
    Ok(())
}

fn remove(ctx: &CommandContext, name: &str) -> Result<()> {
    ctx.catalog.remove_subscription(name)?;
    println!("{} Unsubscribed from '{}'", "✓".green(), name.bold());
    Ok(())
}

fn list(ctx: &CommandContext) -> Result<()> {
    for identifier in ctx.catalog.subscribed_repos()? {
        println!("{identifier}");
    }
    Ok(())
}

fn paths(ctx: &CommandContext) -> Result<()> {
    for identifier in ctx.catalog.subscribed_repos()? {
        println!("{identifier} -> {}", ctx.catalog.repo_path(&identifier).display());
    }
    Ok(())
}

fn show(ctx: &CommandContext, identifier: &str, format: OutputFormat) -> Result<()> {
    let summary = ctx.catalog.repo_summary(identifier)?;
    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Text => {
            print_summary(&summary);
            Ok(())
        }
    }
}

fn print_summary(summary: &RepoSummary) {
    let yes_no = |flag: bool| if flag { "yes".green() } else { "no".yellow() };

    println!("{}", summary.identifier.bold());
    println!("  Path:       {}", summary.path.display());
    println!(
        "  Packages:   {} available, {} installed",
        summary.available_count, summary.installed_count
    );
    println!("  Trusted:    {}", yes_no(summary.is_trusted));
    println!("  Subscribed: {}", yes_no(summary.is_subscribed));
    println!("  Indexed:    {}", summary.last_indexed_at.format("%Y-%m-%d %H:%M:%S"));
}

fn index(ctx: &CommandContext, identifier: &str) -> Result<()> {
    let repo_path = ctx.catalog.repo_path(identifier);
    if !is_existing_dir(&repo_path) {
        return Err(RepomanError::RepoNotFound {
            identifier: identifier.to_string(),
            path: repo_path.display().to_string(),
        }
        .into());
    }

    let spinner = Spinner::new(ctx.no_progress);
    spinner.set_message(format!("Indexing {}", repo_path.display()));
    let result = ctx.catalog.index_builder().write_index_with(&repo_path, |count, record| {
        spinner.set_message(format!("Indexed {count} packages ({})", record.path));
    });
    spinner.finish_and_clear();

    let count = result?;
    println!(
        "{} Indexed {count} packages in {}",
        "✓".green(),
        repo_path.display()
    );
    Ok(())
}
