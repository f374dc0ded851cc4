//! Unified application error type.
//! All modules (storage, store, aggregate, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Corrupted data in blob '{0}': {1}")]
    Corrupt(String, String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Unknown species: {0}")]
    InvalidSpecies(String),

    #[error("Invalid pest count: {0} (must be zero or positive)")]
    InvalidCount(i64),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("New password and confirmation do not match")]
    PasswordConfirmation,

    #[error("Current password is incorrect")]
    PasswordMismatch,

    // ---------------------------
    // Account / session errors
    // ---------------------------
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No account found for username '{0}'")]
    UnknownUsername(String),

    #[error("Not logged in")]
    NotLoggedIn,

    // ---------------------------
    // Device control errors
    // ---------------------------
    #[error("Invalid switch value '{0}' (use 'on' or 'off')")]
    InvalidSwitch(String),

    #[error("No camera with number {0}")]
    InvalidCamera(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
