//! # Configuration
//!
//! Everything is read from the environment. A `.env` file in the working
//! directory is loaded first if present.
//!
//! | Variable | Default |
//! |---|---|
//! | `CALCULATOR_STORE_URI` | required (`sqlite::memory:` or `sqlite://<dir>`) |
//! | `CALCULATOR_DB_NAME` | `calculator` |
//! | `CALCULATOR_HOST` | `0.0.0.0` |
//! | `CALCULATOR_PORT` | `8080` |
//! | `CALCULATOR_LOG_LEVEL` | `info` |
//! | `CALCULATOR_LOG_JSON` | `false` |

use thiserror::Error;

use crate::http_server::HttpServerConfig;
use crate::observability::{LoggingConfig, DEFAULT_LOG_LEVEL};
use crate::store::{StoreConfig, DEFAULT_DB_NAME};

pub const ENV_STORE_URI: &str = "CALCULATOR_STORE_URI";
pub const ENV_DB_NAME: &str = "CALCULATOR_DB_NAME";
pub const ENV_HOST: &str = "CALCULATOR_HOST";
pub const ENV_PORT: &str = "CALCULATOR_PORT";
pub const ENV_LOG_LEVEL: &str = "CALCULATOR_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "CALCULATOR_LOG_JSON";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingRequired { var: String },

    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: HttpServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load from the process environment (and `.env`, if present)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let uri = get(ENV_STORE_URI).ok_or_else(|| ConfigError::MissingRequired {
            var: ENV_STORE_URI.to_string(),
        })?;
        let db_name = get(ENV_DB_NAME).unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        let mut server = HttpServerConfig::default();
        if let Some(host) = get(ENV_HOST) {
            server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            server.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    var: ENV_PORT.to_string(),
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        let json = match get(ENV_LOG_JSON) {
            Some(raw) => parse_bool(ENV_LOG_JSON, &raw)?,
            None => false,
        };
        let logging = LoggingConfig {
            level: get(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            json,
        };

        Ok(Self {
            server,
            store: StoreConfig::new(uri, db_name),
            logging,
        })
    }
}

fn parse_bool(var: &str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> ConfigResult<AppConfig> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| env.get(var).cloned())
    }

    #[test]
    fn test_store_uri_is_required() {
        assert_eq!(
            load(&[]),
            Err(ConfigError::MissingRequired {
                var: ENV_STORE_URI.to_string()
            })
        );
        assert!(load(&[(ENV_STORE_URI, "  ")]).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = load(&[(ENV_STORE_URI, "sqlite://./data")]).unwrap();
        assert_eq!(config.store.db_name, "calculator");
        assert_eq!(config.server, HttpServerConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (ENV_STORE_URI, "sqlite::memory:"),
            (ENV_DB_NAME, "ledger"),
            (ENV_HOST, "127.0.0.1"),
            (ENV_PORT, "3000"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_JSON, "true"),
        ])
        .unwrap();

        assert_eq!(config.store, StoreConfig::new("sqlite::memory:", "ledger"));
        assert_eq!(config.server.socket_addr(), "127.0.0.1:3000");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_port() {
        let result = load(&[(ENV_STORE_URI, "sqlite::memory:"), (ENV_PORT, "eighty")]);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_invalid_bool() {
        let result = load(&[(ENV_STORE_URI, "sqlite::memory:"), (ENV_LOG_JSON, "maybe")]);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
