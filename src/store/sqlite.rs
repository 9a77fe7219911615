//! # SQLite Record Store
//!
//! The `calculations` collection as a single SQLite table. Times are stored
//! as microseconds since the Unix epoch so history ordering is numeric.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::Row;

use crate::calc::Operation;

use super::clock::MonotonicClock;
use super::config::{StoreConfig, StoreLocation, MEMORY_URI};
use super::errors::{StoreError, StoreResult};
use super::record::{CalculationDraft, CalculationRecord, RecordId};
use super::CalculationStore;

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

const SELECT_COLUMNS: &str =
    "SELECT id, operation, num1, num2, result, timestamp, updated_at FROM calculations";

/// SQLite-backed calculation store
#[derive(Debug)]
pub struct SqliteCalculationStore {
    pool: SqlitePool,
    clock: MonotonicClock,
}

impl SqliteCalculationStore {
    /// Open the database described by `config`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionFailed`] if the location is invalid
    /// or the database cannot be opened, and [`StoreError::MigrationFailed`]
    /// if the schema cannot be created.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let pool = match config.location()? {
            StoreLocation::Memory => Self::memory_pool().await?,
            StoreLocation::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| StoreError::ConnectionFailed {
                        message: format!("Failed to create database directory: {e}"),
                    })?;
                }

                let options = SqliteConnectOptions::new()
                    .filename(&path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal);

                SqlitePoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .acquire_timeout(ACQUIRE_TIMEOUT)
                    .connect_with(options)
                    .await
                    .map_err(|e| StoreError::ConnectionFailed {
                        message: format!("Failed to open {}: {e}", path.display()),
                    })?
            }
        };

        Self::with_pool(pool).await
    }

    /// Private in-memory database
    pub async fn in_memory() -> StoreResult<Self> {
        Self::with_pool(Self::memory_pool().await?).await
    }

    // Every pooled connection to `:memory:` is its own database, so pin a
    // single connection and never recycle it.
    async fn memory_pool() -> StoreResult<SqlitePool> {
        let options = SqliteConnectOptions::from_str(MEMORY_URI).map_err(|e| {
            StoreError::ConnectionFailed {
                message: format!("Invalid memory database options: {e}"),
            }
        })?;
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })
    }

    async fn with_pool(pool: SqlitePool) -> StoreResult<Self> {
        run_migrations(&pool).await?;

        let latest: i64 = sqlx::query_scalar::<_, i64>("SELECT COALESCE(MAX(timestamp), 0) FROM calculations")
            .fetch_one(&pool)
            .await
            .map_err(|e| StoreError::query("latest_timestamp", e))?;

        Ok(Self {
            pool,
            clock: MonotonicClock::starting_after(latest),
        })
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    let schema_001 = include_str!("../../migrations/001_calculations.sql");
    sqlx::raw_sql(schema_001)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationFailed {
            version: "001".to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}

fn corrupt(err: impl std::fmt::Display) -> StoreError {
    StoreError::Corrupt {
        message: err.to_string(),
    }
}

fn micros_to_datetime(micros: i64) -> StoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| corrupt(format!("timestamp out of range: {micros}")))
}

// SQLite stores NaN as NULL
fn number(row: &SqliteRow, column: &str) -> StoreResult<f64> {
    let value: Option<f64> = row.try_get(column).map_err(corrupt)?;
    Ok(value.unwrap_or(f64::NAN))
}

fn decode_row(row: &SqliteRow) -> StoreResult<CalculationRecord> {
    let id: String = row.try_get("id").map_err(corrupt)?;
    let operation: String = row.try_get("operation").map_err(corrupt)?;
    let timestamp: i64 = row.try_get("timestamp").map_err(corrupt)?;
    let updated_at: Option<i64> = row.try_get("updated_at").map_err(corrupt)?;

    Ok(CalculationRecord {
        id: RecordId::parse(&id).map_err(corrupt)?,
        operation: operation.parse::<Operation>().map_err(corrupt)?,
        num1: number(row, "num1")?,
        num2: number(row, "num2")?,
        result: number(row, "result")?,
        timestamp: micros_to_datetime(timestamp)?,
        updated_at: updated_at.map(micros_to_datetime).transpose()?,
    })
}

#[async_trait]
impl CalculationStore for SqliteCalculationStore {
    async fn insert(&self, draft: CalculationDraft) -> StoreResult<CalculationRecord> {
        let record = CalculationRecord::create(draft, self.clock.now());

        sqlx::query(
            "INSERT INTO calculations (id, operation, num1, num2, result, timestamp) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(record.id.to_string())
        .bind(record.operation.as_str())
        .bind(record.num1)
        .bind(record.num2)
        .bind(record.result)
        .bind(record.timestamp.timestamp_micros())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::query("insert", e))?;

        Ok(record)
    }

    async fn recent(&self, limit: usize) -> StoreResult<Vec<CalculationRecord>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} ORDER BY timestamp DESC, seq DESC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::query("recent", e))?;

        rows.iter().map(decode_row).collect()
    }

    async fn find(&self, id: &RecordId) -> StoreResult<Option<CalculationRecord>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::query("find", e))?;

        row.as_ref().map(decode_row).transpose()
    }

    async fn update(&self, id: &RecordId, draft: CalculationDraft) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE calculations \
             SET operation = ?, num1 = ?, num2 = ?, result = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(draft.operation.as_str())
        .bind(draft.num1)
        .bind(draft.num2)
        .bind(draft.result)
        .bind(self.clock.now().timestamp_micros())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::query("update", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &RecordId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM calculations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::query("delete", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Unavailable {
                message: e.to_string(),
            })
    }
}
