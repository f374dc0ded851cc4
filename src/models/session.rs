use super::account::UserAccount;
use serde::{Deserialize, Serialize};

/// Persisted session blob.
///
/// `logged_in` is the sole authority: logout only clears the flag, so
/// `current_user` may hold a stale identity afterwards. Readers must check
/// the flag before trusting the identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub logged_in: bool,
    pub current_user: Option<UserAccount>,
}
