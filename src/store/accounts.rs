//! The registered-account list: credential lookup, signup, profile updates
//! and password management.
//!
//! Accounts persist wholesale under the `accounts` blob. An absent blob is an
//! empty list. Credentials are stored and compared in clear text; nothing
//! here is a real authentication layer.

use crate::errors::{AppError, AppResult};
use crate::models::account::{NewAccount, ProfileUpdate, UserAccount};
use crate::storage::blobs::{self, Loaded};
use crate::storage::log::ttlog;
use crate::storage::pool::Storage;
use crate::store::session;
use chrono::Local;
use regex::Regex;

/// Password handed out by `reset_password`.
pub const RESET_PASSWORD: &str = "newpass123";

/// Minimum length accepted at signup and on password change.
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn load(storage: &Storage) -> AppResult<Vec<UserAccount>> {
    let saved: Loaded<Vec<UserAccount>> = blobs::read(storage, blobs::ACCOUNTS)?;
    Ok(saved.unwrap_or_else(Vec::new))
}

pub fn save(storage: &Storage, list: &[UserAccount]) -> AppResult<()> {
    blobs::write(storage, blobs::ACCOUNTS, &list)
}

/// Linear scan for an exact, case-sensitive match on both fields.
pub fn find_by_credentials(
    storage: &Storage,
    username: &str,
    password: &str,
) -> AppResult<Option<UserAccount>> {
    let accounts = load(storage)?;
    Ok(accounts
        .into_iter()
        .find(|a| a.username == username && a.password == password))
}

/// Existence check used as the signup precondition. `create` itself does not
/// re-check: the store is single-writer, so the check cannot go stale.
pub fn exists_by_username(storage: &Storage, username: &str) -> AppResult<bool> {
    let accounts = load(storage)?;
    Ok(accounts.iter().any(|a| a.username == username))
}

/// Validate the signup fields against the store. Callers run this before
/// `create`; the store trusts it has been done.
pub fn validate_signup(storage: &Storage, fields: &NewAccount) -> AppResult<()> {
    if exists_by_username(storage, &fields.username)? {
        return Err(AppError::DuplicateUsername(fields.username.clone()));
    }
    if !valid_email(&fields.email) {
        return Err(AppError::InvalidEmail(fields.email.clone()));
    }
    if fields.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

fn valid_email(email: &str) -> bool {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    re.is_match(email)
}

fn next_id(list: &[UserAccount]) -> i64 {
    list.iter().map(|a| a.id).max().unwrap_or(0) + 1
}

/// Append a new account and persist. Precondition: `validate_signup` passed.
pub fn create(storage: &Storage, fields: NewAccount) -> AppResult<UserAccount> {
    let mut accounts = load(storage)?;

    let account = UserAccount {
        id: next_id(&accounts),
        name: fields.name,
        username: fields.username,
        email: fields.email,
        password: fields.password,
        farm_location: fields.farm_location,
        phone: fields.phone,
        created_at: Local::now().to_rfc3339(),
    };

    accounts.push(account.clone());
    save(storage, &accounts)?;

    let _ = ttlog(
        &storage.conn,
        "signup",
        &account.username,
        "New account registered",
    );

    Ok(account)
}

/// Overwrite the four editable profile fields. Unknown ids are a silent
/// no-op, matching `delete` on the record store (and unlike
/// `reset_password`, which reports unknown usernames).
pub fn update_profile(storage: &Storage, id: i64, update: ProfileUpdate) -> AppResult<()> {
    let mut accounts = load(storage)?;

    if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
        account.name = update.name;
        account.email = update.email;
        account.phone = update.phone;
        account.farm_location = update.farm_location;
    }

    save(storage, &accounts)
}

/// Set the account's password to the fixed recovery value.
pub fn reset_password(storage: &Storage, username: &str) -> AppResult<()> {
    let mut accounts = load(storage)?;

    let account = accounts
        .iter_mut()
        .find(|a| a.username == username)
        .ok_or_else(|| AppError::UnknownUsername(username.to_string()))?;

    account.password = RESET_PASSWORD.to_string();
    save(storage, &accounts)?;

    let _ = ttlog(&storage.conn, "password", username, "Password reset");

    Ok(())
}

/// Change a password after verifying the old one. The demo admin is not a
/// store record: presenting the demo-admin pair succeeds with only the
/// session's cached identity updated. On success the session copy is
/// refreshed so `whoami` and a later change see the new password.
pub fn change_password(storage: &Storage, id: i64, old: &str, new: &str) -> AppResult<()> {
    if new.len() < MIN_PASSWORD_LEN {
        return Err(AppError::PasswordTooShort(MIN_PASSWORD_LEN));
    }

    let mut accounts = load(storage)?;

    if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
        if account.password != old {
            return Err(AppError::PasswordMismatch);
        }
        account.password = new.to_string();
        save(storage, &accounts)?;
    } else if id == session::DEMO_ADMIN_ID && old == session::DEMO_ADMIN_PASSWORD {
        // no store record to update for the demo admin
    } else {
        return Err(AppError::PasswordMismatch);
    }

    session::refresh_cached_password(storage, id, new)?;

    let _ = ttlog(
        &storage.conn,
        "password",
        &id.to_string(),
        "Password changed",
    );

    Ok(())
}
