use rusqlite::{Connection, Result};

/// Ensure that the `kv` table exists.
///
/// The whole persisted state of the application lives in this table: three
/// named blobs (`observations`, `accounts`, `session`), each a JSON document
/// read and rewritten wholesale on every mutation. There are no row-level
/// records to migrate, so schema evolution stays trivial.
fn ensure_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `log` table exists with the modern schema.
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

/// Run all pending migrations. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_kv_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
