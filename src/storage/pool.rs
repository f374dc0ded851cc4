//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::AppResult;
use crate::storage::initialize::init_storage;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct Storage {
    pub conn: Connection,
}

impl Storage {
    /// Open the storage file, creating the parent directory and the schema
    /// when missing. Every command goes through here, so a fresh machine
    /// works without an explicit `init`.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(p)?;
        init_storage(&conn)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        func(&mut self.conn)
    }
}
