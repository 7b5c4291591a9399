use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a migration marker is already present in the log.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `kv_store` table holding one JSON document per key.
fn migrate_create_kv_store(conn: &Connection) -> Result<()> {
    let version = "20261001_0001_create_kv_store";

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    if migration_applied(conn, version)? {
        return Ok(());
    }

    mark_applied(conn, version, "Created kv_store table")?;

    // in-memory databases are created for every test run, keep them quiet
    if !is_in_memory(conn) {
        success(format!("Migration applied: {}", version));
    }
    Ok(())
}

fn is_in_memory(conn: &Connection) -> bool {
    conn.query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .map(|p| p.is_empty())
        .unwrap_or(true)
}

/// Public entry point: run all pending migrations.
///
/// Invoked every time a database is opened; each step is idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_kv_store(conn)?;
    Ok(())
}
