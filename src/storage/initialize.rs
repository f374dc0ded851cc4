use crate::errors::AppResult;
use crate::storage::migrate::run_pending_migrations;
use rusqlite::Connection;

/// Initialize the storage file.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_storage(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
