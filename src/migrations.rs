//! Schema migration framework.
//!
//! Numbered SQL migrations are embedded at compile time via `include_str!`.
//! Each migration runs exactly once, tracked by the `schema_version` table.
//! Before any pending migration is applied, a hot copy of the database is
//! written next to it via SQLite's online backup API.

use rusqlite::Connection;

struct Migration {
    version: i32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("migrations/001_baseline.sql"),
}];

/// Create the `schema_version` table if it doesn't exist.
fn ensure_schema_version_table(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
    .map_err(|e| format!("Failed to create schema_version table: {}", e))
}

/// Return the highest applied migration version, or 0 if none.
fn current_version(conn: &Connection) -> Result<i32, String> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| format!("Failed to read schema version: {}", e))
}

/// Detect a pre-framework database and mark the baseline as applied.
///
/// If the `providers` table exists but `schema_version` is empty, the
/// database predates the migration framework. Mark migration 001 as applied
/// so the baseline CREATE TABLE statements never run against populated
/// tables.
fn bootstrap_existing_db(conn: &Connection) -> Result<bool, String> {
    let version = current_version(conn)?;
    if version > 0 {
        return Ok(false);
    }

    let has_providers: bool = conn
        .prepare("SELECT 1 FROM providers LIMIT 1")
        .and_then(|mut stmt| stmt.exists([]))
        .unwrap_or(false);

    if has_providers {
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            [1],
        )
        .map_err(|e| format!("Failed to bootstrap schema version: {}", e))?;
        log::info!("Migration bootstrap: marked v1 (baseline) as applied for existing database");
        return Ok(true);
    }

    Ok(false)
}

/// Back up the database before applying migrations.
///
/// Uses SQLite's online backup API to create a hot copy at
/// `<db_path>.pre-migration.bak`. Only called when migrations are pending.
fn backup_before_migration(conn: &Connection) -> Result<(), String> {
    let db_path: String = conn
        .query_row("PRAGMA database_list", [], |row| row.get(2))
        .map_err(|e| format!("Failed to get database path: {}", e))?;

    if db_path.is_empty() || db_path == ":memory:" {
        // In-memory or temp database — skip backup
        return Ok(());
    }

    let backup_path = format!("{}.pre-migration.bak", db_path);
    let mut backup_conn = rusqlite::Connection::open(&backup_path)
        .map_err(|e| format!("Failed to open backup file: {}", e))?;

    let backup = rusqlite::backup::Backup::new(conn, &mut backup_conn)
        .map_err(|e| format!("Failed to initialize pre-migration backup: {}", e))?;

    backup
        .step(-1)
        .map_err(|e| format!("Pre-migration backup failed: {}", e))?;

    log::info!("Pre-migration backup created at {}", backup_path);
    Ok(())
}

/// Run all pending migrations.
///
/// Returns the number of migrations applied (0 if already up-to-date).
///
/// Forward-compat guard: if the database has a higher version than the
/// highest known migration, returns an error telling the user to update.
pub fn run_migrations(conn: &Connection) -> Result<usize, String> {
    ensure_schema_version_table(conn)?;
    bootstrap_existing_db(conn)?;

    let current = current_version(conn)?;
    let max_known = MIGRATIONS.last().map(|m| m.version).unwrap_or(0);

    if current > max_known {
        return Err(format!(
            "Database schema version ({}) is newer than this build supports ({}). \
             Please update foodbridge to the latest version.",
            current, max_known
        ));
    }

    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > current).collect();

    if pending.is_empty() {
        return Ok(0);
    }

    backup_before_migration(conn)?;

    for migration in &pending {
        conn.execute_batch(migration.sql)
            .map_err(|e| format!("Migration v{} failed: {}", migration.version, e))?;

        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [migration.version],
        )
        .map_err(|e| format!("Failed to record migration v{}: {}", migration.version, e))?;

        log::info!("Applied migration v{}", migration.version);
    }

    Ok(pending.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn mem_db() -> Connection {
        Connection::open_in_memory().expect("in-memory db")
    }

    #[test]
    fn test_fresh_db_applies_baseline() {
        let conn = mem_db();
        let applied = run_migrations(&conn).expect("migrations should succeed");
        assert_eq!(applied, 1, "should apply exactly 1 migration (baseline)");

        let version = current_version(&conn).expect("version query");
        assert_eq!(version, 1);

        // All four tables exist and are empty
        for table in ["providers", "receivers", "food_listings", "claims"] {
            let count: i32 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .unwrap_or_else(|_| panic!("{table} table should exist"));
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_quantity_check_constraint() {
        let conn = mem_db();
        run_migrations(&conn).expect("migrations");

        conn.execute(
            "INSERT INTO providers (Name, Type, City, Contact, Address)
             VALUES ('P', 'Retail', 'X', '555', 'Addr')",
            [],
        )
        .expect("insert provider");

        let result = conn.execute(
            "INSERT INTO food_listings (Food_Name, Quantity, Expiry_Date, Provider_ID,
             Provider_Type, Location, Food_Type, Meal_Type)
             VALUES ('Rice', 0, '2026-01-01', 1, 'Retail', 'X', 'Grain', 'Dinner')",
            [],
        );
        assert!(result.is_err(), "Quantity below 1 must be rejected");
    }

    #[test]
    fn test_status_check_constraint() {
        let conn = mem_db();
        run_migrations(&conn).expect("migrations");

        let result = conn.execute(
            "INSERT INTO claims (Food_ID, Receiver_ID, Status, Timestamp)
             VALUES (1, 1, 'Cancelled', '2026-01-01')",
            [],
        );
        assert!(result.is_err(), "Status outside the enum must be rejected");
    }

    #[test]
    fn test_bootstrap_existing_db() {
        let conn = mem_db();

        // Simulate a pre-framework database with data
        conn.execute_batch(
            "CREATE TABLE providers (
                Provider_ID INTEGER PRIMARY KEY AUTOINCREMENT,
                Name TEXT NOT NULL,
                Type TEXT NOT NULL,
                City TEXT NOT NULL,
                Contact TEXT NOT NULL,
                Address TEXT NOT NULL
            );
            INSERT INTO providers (Name, Type, City, Contact, Address)
            VALUES ('Existing', 'Retail', 'Springfield', '555-0100', '1 Main St');",
        )
        .expect("seed existing db");

        let applied = run_migrations(&conn).expect("migrations should succeed");
        assert_eq!(applied, 0, "bootstrap should mark v1 as applied, not run SQL");

        let version = current_version(&conn).expect("version query");
        assert_eq!(version, 1);

        let name: String = conn
            .query_row("SELECT Name FROM providers WHERE Provider_ID = 1", [], |r| {
                r.get(0)
            })
            .expect("existing data should be preserved");
        assert_eq!(name, "Existing");
    }

    #[test]
    fn test_forward_compat_guard() {
        let conn = mem_db();

        ensure_schema_version_table(&conn).unwrap();
        conn.execute("INSERT INTO schema_version (version) VALUES (999)", [])
            .unwrap();

        let result = run_migrations(&conn);
        assert!(result.is_err());
        assert!(
            result.unwrap_err().contains("newer than this build"),
            "error should mention version mismatch"
        );
    }

    #[test]
    fn test_idempotency() {
        let conn = mem_db();

        let first = run_migrations(&conn).expect("first run");
        assert_eq!(first, 1);

        let second = run_migrations(&conn).expect("second run");
        assert_eq!(second, 0, "second run should apply no migrations");
    }

    #[test]
    fn test_pre_migration_backup_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("test_backup.db");

        let conn = Connection::open(&db_path).expect("open db");
        conn.execute_batch("PRAGMA journal_mode=WAL;").unwrap();

        let applied = run_migrations(&conn).expect("migrations should succeed");
        assert_eq!(applied, 1);

        let backup_path = dir.path().join("test_backup.db.pre-migration.bak");
        assert!(
            backup_path.exists(),
            "pre-migration backup should be created at {}",
            backup_path.display()
        );
    }
}
