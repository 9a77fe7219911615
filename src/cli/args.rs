//! CLI argument definitions using clap
//!
//! Commands:
//! - calcserver serve [--host <host>] [--port <port>] [--log-json]
//! - calcserver check-config

use clap::{Parser, Subcommand};

/// calcserver - HTTP calculator with persistent history
#[derive(Parser, Debug)]
#[command(name = "calcserver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Validate configuration and the store location, then exit
    CheckConfig,
}

/// Overrides applied on top of the environment configuration
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Emit JSON log lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to run
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["calcserver"]).unwrap();
        assert_eq!(cli.command(), Command::Serve(ServeArgs::default()));
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            Cli::try_parse_from(["calcserver", "serve", "--port", "9000", "--log-json"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Serve(ServeArgs {
                host: None,
                port: Some(9000),
                log_json: true,
            })
        );
    }

    #[test]
    fn test_check_config() {
        let cli = Cli::try_parse_from(["calcserver", "check-config"]).unwrap();
        assert_eq!(cli.command(), Command::CheckConfig);
    }
}
