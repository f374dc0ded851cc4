use serde::{Deserialize, Serialize};

/// A registered user of the dashboard.
///
/// The password is stored in clear text and compared as-is: this is a local,
/// single-user demo account list, not an authentication system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub farm_location: String,
    pub phone: String,
    pub created_at: String, // ISO8601
}

/// Fields collected at signup.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub farm_location: String,
    pub phone: String,
}

/// The profile fields a user may edit after signup.
/// An update overwrites all four fields at once.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub farm_location: String,
}
