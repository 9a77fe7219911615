//! CLI command implementations
//!
//! `serve` follows a fixed boot sequence: configuration, logging, record
//! store, then the HTTP listener. A store that cannot be opened aborts the
//! boot; there is no retry.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::observability;
use crate::rest_api::AppState;
use crate::store::{SqliteCalculationStore, StoreLocation};

use super::args::{Command, ServeArgs};
use super::errors::CliResult;

/// Run a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    let config = AppConfig::from_env()?;
    match command {
        Command::Serve(args) => serve(apply_overrides(config, &args)).await,
        Command::CheckConfig => check_config(&config),
    }
}

/// Fold command-line overrides into the environment configuration
pub fn apply_overrides(mut config: AppConfig, args: &ServeArgs) -> AppConfig {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.log_json {
        config.logging.json = true;
    }
    config
}

/// Boot and serve until a shutdown signal
pub async fn serve(config: AppConfig) -> CliResult<()> {
    observability::init_logging(&config.logging)?;

    tracing::info!(
        db_name = %config.store.db_name,
        location = ?config.store.location().ok(),
        "Attempting to connect to record store"
    );
    let store = match SqliteCalculationStore::connect(&config.store).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "record store connection error");
            return Err(e.into());
        }
    };
    tracing::info!(db_name = %config.store.db_name, "Connected to record store");

    let state = Arc::new(AppState::new(store.clone()));
    let result = HttpServer::new(config.server, state).start().await;

    store.close().await;
    Ok(result?)
}

/// Validate configuration without starting anything
pub fn check_config(config: &AppConfig) -> CliResult<()> {
    let location = config.store.location()?;
    let store = match location {
        StoreLocation::Memory => "in-memory".to_string(),
        StoreLocation::File(path) => path.display().to_string(),
    };

    println!("listen: {}", config.server.socket_addr());
    println!("store:  {store}");
    println!("log:    {} (json: {})", config.logging.level, config.logging.json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_server::HttpServerConfig;
    use crate::observability::LoggingConfig;
    use crate::store::StoreConfig;

    fn base_config() -> AppConfig {
        AppConfig {
            server: HttpServerConfig::default(),
            store: StoreConfig::in_memory(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_apply_overrides() {
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(9999),
            log_json: true,
        };
        let config = apply_overrides(base_config(), &args);

        assert_eq!(config.server.socket_addr(), "127.0.0.1:9999");
        assert!(config.logging.json);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = apply_overrides(base_config(), &ServeArgs::default());
        assert_eq!(config, base_config());
    }

    #[test]
    fn test_check_config_rejects_bad_store_uri() {
        let mut config = base_config();
        config.store = StoreConfig::new("mongodb://localhost", "calculator");
        assert!(check_config(&config).is_err());
    }
}
