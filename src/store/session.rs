//! The login session: who is currently signed in, persisted across runs.
//!
//! Login tries two strategies in order: the account store first, then the
//! fixed demo-admin pair. The demo admin is not an account record: it
//! synthesizes a display identity on the fly and works even against an
//! empty store.

use crate::errors::{AppError, AppResult};
use crate::models::account::UserAccount;
use crate::models::session::SessionState;
use crate::storage::blobs::{self, Loaded};
use crate::storage::log::ttlog;
use crate::storage::pool::Storage;
use crate::store::accounts;
use chrono::Local;

pub const DEMO_ADMIN_ID: i64 = 0;
pub const DEMO_ADMIN_USERNAME: &str = "admin";
pub const DEMO_ADMIN_PASSWORD: &str = "admin123";

fn demo_admin_identity() -> UserAccount {
    UserAccount {
        id: DEMO_ADMIN_ID,
        name: "Administrator".to_string(),
        username: DEMO_ADMIN_USERNAME.to_string(),
        email: "admin@pestwatch.local".to_string(),
        password: DEMO_ADMIN_PASSWORD.to_string(),
        farm_location: "Demo Farm".to_string(),
        phone: String::new(),
        created_at: Local::now().to_rfc3339(),
    }
}

fn load_state(storage: &Storage) -> AppResult<SessionState> {
    let saved: Loaded<SessionState> = blobs::read(storage, blobs::SESSION)?;
    Ok(saved.unwrap_or_else(SessionState::default))
}

fn save_state(storage: &Storage, state: &SessionState) -> AppResult<()> {
    blobs::write(storage, blobs::SESSION, state)
}

/// Authenticate and persist the session identity.
pub fn login(storage: &Storage, username: &str, password: &str) -> AppResult<UserAccount> {
    let user = match accounts::find_by_credentials(storage, username, password)? {
        Some(account) => account,
        None if username == DEMO_ADMIN_USERNAME && password == DEMO_ADMIN_PASSWORD => {
            demo_admin_identity()
        }
        None => return Err(AppError::InvalidCredentials),
    };

    let state = SessionState {
        logged_in: true,
        current_user: Some(user.clone()),
    };
    save_state(storage, &state)?;

    let _ = ttlog(&storage.conn, "login", &user.username, "User logged in");

    Ok(user)
}

/// Clear the login flag. The cached identity is left in place (stale); the
/// flag alone decides whether anyone is logged in.
pub fn logout(storage: &Storage) -> AppResult<()> {
    let mut state = load_state(storage)?;
    state.logged_in = false;
    save_state(storage, &state)?;

    let _ = ttlog(&storage.conn, "logout", "", "User logged out");

    Ok(())
}

/// The current identity, or None when nobody is logged in.
pub fn current(storage: &Storage) -> AppResult<Option<UserAccount>> {
    let state = load_state(storage)?;
    if state.logged_in {
        Ok(state.current_user)
    } else {
        Ok(None)
    }
}

/// Keep the session's cached account in step after a password change.
pub fn refresh_cached_password(storage: &Storage, id: i64, new_password: &str) -> AppResult<()> {
    let mut state = load_state(storage)?;

    if let Some(user) = state.current_user.as_mut()
        && user.id == id
    {
        user.password = new_password.to_string();
        save_state(storage, &state)?;
    }

    Ok(())
}
