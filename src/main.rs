//! repoman CLI entry point
//!
//! Parses arguments, installs the log subscriber, runs the command and turns
//! failures into a colored message and a per-kind exit code.

use clap::Parser;
use repoman_cli::cli::Cli;
use repoman_cli::core::user_friendly_error;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    init_logging(&config.log_level);

    if let Err(e) = cli.execute_with_config(config) {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(error_ctx.exit_code());
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over the level chosen by the
/// verbosity flags.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
