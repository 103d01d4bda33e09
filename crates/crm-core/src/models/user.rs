//! User identity record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account.
///
/// `password` always holds the bcrypt hash, never plaintext. The field is
/// skipped during serialization so it cannot leak through a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Display name, e.g. "Jane Smith"
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
