//! Named JSON blobs in the `kv` table.
//!
//! Each store owns exactly one key and rewrites its whole value on every
//! mutation; no other component touches that key. A missing key is a normal
//! condition (first run), a present-but-unparsable value is not: it fails
//! closed with `AppError::Corrupt` instead of silently resetting to defaults.

use crate::errors::{AppError, AppResult};
use crate::storage::pool::Storage;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const OBSERVATIONS: &str = "observations";
pub const ACCOUNTS: &str = "accounts";
pub const SESSION: &str = "session";

/// Outcome of reading a blob: the key may simply not exist yet.
/// Default substitution happens at the caller, where it is visible.
#[derive(Debug)]
pub enum Loaded<T> {
    Present(T),
    Absent,
}

impl<T> Loaded<T> {
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Loaded::Present(value) => value,
            Loaded::Absent => default(),
        }
    }
}

pub fn read<T: DeserializeOwned>(storage: &Storage, key: &str) -> AppResult<Loaded<T>> {
    let raw: Option<String> = storage
        .conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;

    match raw {
        Some(json) => {
            let value = serde_json::from_str(&json)
                .map_err(|e| AppError::Corrupt(key.to_string(), e.to_string()))?;
            Ok(Loaded::Present(value))
        }
        None => Ok(Loaded::Absent),
    }
}

pub fn write<T: Serialize>(storage: &Storage, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    storage.conn.execute(
        "INSERT INTO kv (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
        params![key, json, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// True when the key holds a value (regardless of its content).
pub fn exists(storage: &Storage, key: &str) -> AppResult<bool> {
    let mut stmt = storage.conn.prepare("SELECT 1 FROM kv WHERE key = ?1")?;
    Ok(stmt.exists([key])?)
}
