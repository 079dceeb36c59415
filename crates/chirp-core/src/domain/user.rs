use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - an account in the system.
///
/// Created at registration, read during login and session resolution; no
/// exposed operation updates or deletes a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable user record. The id and creation stamp come from the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Equality filter over users. Populated fields must all match; an empty
/// filter matches every row.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
}
