use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Fixed bcrypt work factor
const HASH_COST: u32 = 10;

/// One-way salted password hashing with constant-time verification.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// Hash a plaintext password with a fresh salt
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| AuthError::Hash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// A malformed stored hash fails closed: returns `false`, never an error.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
