//! Error types for the data-access core.
//!
//! Two runtime error kinds cross the presentation boundary:
//! - `QueryError`: a read statement failed; the caller gets an empty result
//!   plus the store's message.
//! - `ExecutionError`: a write statement failed; the store is unmodified
//!   because every write is a single atomic statement.
//!
//! `DbError` covers open-time failures (paths, migrations) and never reaches
//! the boundary — a store that fails to open has no operations to run.

use thiserror::Error;

/// Errors raised while opening or migrating the database.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Failed to create database directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Migration failed: {0}")]
    Migration(String),
}

/// A read statement failed (bad SQL, connectivity loss, type mismatch in a
/// bound parameter). Recovered locally; never raised past the caller.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Query error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// A write statement failed (constraint violation, invalid foreign key,
/// type mismatch). The single-statement transaction boundary guarantees the
/// store is left unmodified.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("SQL execution error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Serializable outcome of a mutation, for the presentation layer.
///
/// Success carries the human-readable confirmation; failure carries the
/// store's original error text so it can be displayed verbatim.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl From<Result<String, String>> for ActionOutcome {
    fn from(result: Result<String, String>) -> Self {
        match result {
            Ok(message) => ActionOutcome {
                success: true,
                message,
            },
            Err(message) => ActionOutcome {
                success: false,
                message,
            },
        }
    }
}
