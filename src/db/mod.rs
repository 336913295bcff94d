//! SQLite-backed entity store access for the donation network.
//!
//! `FoodDb` wraps a single connection and exposes two primitives — `read`
//! for tabular results and `write` for single-statement mutations — plus
//! typed per-entity accessors in the sibling modules. Every statement binds
//! named parameters; values never reach the SQL text by interpolation.

use std::path::PathBuf;

use rusqlite::{Connection, ToSql};

use crate::config::StoreConfig;
use crate::error::{DbError, ExecutionError, QueryError};
use crate::table::Table;

pub mod types;
pub use types::*;

mod claims;
mod listings;
mod providers;
mod receivers;

/// SQLite connection wrapper for the four-table entity store.
///
/// Intentionally NOT `Clone` or `Sync`. It is held behind a
/// `std::sync::Mutex` in `AppState` so callers access it one operation at a
/// time.
pub struct FoodDb {
    conn: Connection,
}

impl FoodDb {
    /// Borrow the underlying connection for ad-hoc queries.
    pub fn conn_ref(&self) -> &Connection {
        &self.conn
    }

    /// Open (or create) the database at the default location and apply the
    /// schema.
    pub fn open() -> Result<Self, DbError> {
        Self::open_with(&StoreConfig::default())
    }

    /// Open using an explicit store configuration.
    pub fn open_with(config: &StoreConfig) -> Result<Self, DbError> {
        let path = config.resolve_db_path()?;
        Self::open_at(path, config.enforce_foreign_keys)
    }

    /// Open a database at an explicit path. Useful for testing.
    pub(crate) fn open_at(path: PathBuf, enforce_foreign_keys: bool) -> Result<Self, DbError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(DbError::CreateDir)?;
            }
        }

        let conn = Connection::open(&path)?;

        // WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        Self::finish_open(conn, enforce_foreign_keys)
    }

    /// Open a fresh in-memory database. Used throughout the test suites.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        Self::finish_open(conn, true)
    }

    fn finish_open(conn: Connection, enforce_foreign_keys: bool) -> Result<Self, DbError> {
        crate::migrations::run_migrations(&conn).map_err(DbError::Migration)?;

        // FK enforcement is the store's referential policy; the core never
        // duplicates these checks. Set after migrations so future table
        // rebuilds can toggle it off locally.
        if enforce_foreign_keys {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        }

        Ok(Self { conn })
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    /// Execute a read-only statement and collect the result as a `Table`.
    ///
    /// Parameters bind by name (`:name`). Every placeholder in the statement
    /// must be bound — an unbound placeholder is a programming error in the
    /// caller, not a runtime data error.
    pub fn read(&self, sql: &str, params: &[(&str, &dyn ToSql)]) -> Result<Table, QueryError> {
        let mut stmt = self.conn.prepare(sql)?;
        debug_assert_eq!(
            stmt.parameter_count(),
            params.len(),
            "every placeholder must be bound"
        );

        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
        let column_count = columns.len();

        let mut rows = stmt.query(params)?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for i in 0..column_count {
                cells.push(row.get::<_, rusqlite::types::Value>(i)?);
            }
            out.push(cells);
        }

        Ok(Table { columns, rows: out })
    }

    /// Execute one insert/update/delete statement and return the number of
    /// affected rows. SQLite's per-statement transaction makes each call
    /// atomic; on failure the store is left unmodified.
    pub fn write(&self, sql: &str, params: &[(&str, &dyn ToSql)]) -> Result<usize, ExecutionError> {
        let mut stmt = self.conn.prepare(sql)?;
        debug_assert_eq!(
            stmt.parameter_count(),
            params.len(),
            "every placeholder must be bound"
        );
        Ok(stmt.execute(params)?)
    }

    /// Rowid assigned by the most recent successful insert.
    pub(crate) fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a temporary file-backed database for testing.
    ///
    /// We leak the `TempDir` so the directory persists for the duration of
    /// the test. Test temp dirs are cleaned up by the OS.
    pub(crate) fn test_db() -> FoodDb {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("test_foodbridge.db");
        std::mem::forget(dir);
        FoodDb::open_at(path, true).expect("Failed to open test database")
    }

    #[test]
    fn test_open_creates_tables() {
        let db = test_db();
        for table in ["providers", "receivers", "food_listings", "claims"] {
            let count: i32 = db
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .unwrap_or_else(|_| panic!("{table} table should exist"));
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_read_returns_columns_in_statement_order() {
        let db = FoodDb::open_in_memory().expect("open");
        let table = db
            .read("SELECT Name, City FROM providers", &[])
            .expect("read");
        assert_eq!(table.columns, vec!["Name", "City"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_malformed_sql_is_a_query_error() {
        let db = FoodDb::open_in_memory().expect("open");
        let result = db.read("SELECT FROM nowhere", &[]);
        let err = result.expect_err("malformed SQL must fail");
        assert!(err.to_string().contains("Query error"));
    }

    #[test]
    fn test_write_returns_affected_rows() {
        let db = FoodDb::open_in_memory().expect("open");
        let affected = db
            .write(
                "INSERT INTO providers (Name, Type, City, Contact, Address)
                 VALUES (:name, :type, :city, :contact, :address)",
                rusqlite::named_params! {
                    ":name": "Green Grocer",
                    ":type": "Retail",
                    ":city": "Springfield",
                    ":contact": "555-0100",
                    ":address": "1 Main St",
                },
            )
            .expect("insert");
        assert_eq!(affected, 1);
        assert_eq!(db.last_insert_id(), 1);
    }

    #[test]
    fn test_write_constraint_violation_leaves_store_unmodified() {
        let db = FoodDb::open_in_memory().expect("open");
        // No provider 99 exists; FK enforcement rejects the insert.
        let result = db.write(
            "INSERT INTO food_listings (Food_Name, Quantity, Expiry_Date, Provider_ID,
             Provider_Type, Location, Food_Type, Meal_Type)
             VALUES (:n, :q, :e, :p, :pt, :l, :ft, :mt)",
            rusqlite::named_params! {
                ":n": "Rice", ":q": 10, ":e": "2026-01-01", ":p": 99,
                ":pt": "Retail", ":l": "X", ":ft": "Grain", ":mt": "Dinner",
            },
        );
        assert!(result.is_err());

        let table = db
            .read("SELECT Food_ID FROM food_listings", &[])
            .expect("read");
        assert!(table.is_empty(), "failed write must not leave rows behind");
    }
}
