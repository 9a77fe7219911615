//! CLI module for calcserver
//!
//! Provides command-line interface for:
//! - serve: Boot the record store and HTTP server
//! - check-config: Validate environment configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{apply_overrides, check_config, run_command, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command()).await
}
