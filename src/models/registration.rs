use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored registration. The plaintext email is never persisted, only its
/// salted hash and the salt it was hashed with.
#[derive(Debug, Clone, FromRow)]
pub struct Registration {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_utc: DateTime<Utc>,
    pub email_hash: String,
    pub email_hash_salt: String,
}

impl Registration {
    /// Rows migrated from before email hashing was introduced carry an empty hash.
    pub fn has_email_hash(&self) -> bool {
        !self.email_hash.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub first_name: String,
    pub last_name: String,
    pub created_utc: DateTime<Utc>,
    pub email_hash: String,
    pub email_hash_salt: String,
}
