//! Record store location settings.

use std::path::PathBuf;

use super::errors::{StoreError, StoreResult};

/// Default database name
pub const DEFAULT_DB_NAME: &str = "calculator";

/// Connection string selecting a private in-memory database
pub const MEMORY_URI: &str = "sqlite::memory:";

const SQLITE_SCHEME: &str = "sqlite://";

/// Where the database lives once the connection string is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

/// Record store configuration
///
/// `uri` is either [`MEMORY_URI`] or `sqlite://<directory>`; in the latter
/// case the database file is `<directory>/<db_name>.db`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub uri: String,
    pub db_name: String,
}

impl StoreConfig {
    pub fn new(uri: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            db_name: db_name.into(),
        }
    }

    /// In-memory database, mostly for tests
    pub fn in_memory() -> Self {
        Self::new(MEMORY_URI, DEFAULT_DB_NAME)
    }

    /// Resolve the connection string
    pub fn location(&self) -> StoreResult<StoreLocation> {
        if self.uri == MEMORY_URI {
            return Ok(StoreLocation::Memory);
        }

        let dir = self
            .uri
            .strip_prefix(SQLITE_SCHEME)
            .ok_or_else(|| StoreError::ConnectionFailed {
                message: format!("Unsupported store URI: {}", self.uri),
            })?;
        if dir.is_empty() {
            return Err(StoreError::ConnectionFailed {
                message: "Store URI has no directory".to_string(),
            });
        }
        if self.db_name.is_empty() || self.db_name.contains(['/', '\\']) {
            return Err(StoreError::ConnectionFailed {
                message: format!("Invalid database name: '{}'", self.db_name),
            });
        }

        Ok(StoreLocation::File(
            PathBuf::from(dir).join(format!("{}.db", self.db_name)),
        ))
    }
}
