use crate::Claims;

/// The validated identity attached to one request after bearer verification.
/// Lives for the duration of the request, never persisted.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: i64,
    pub email: String,
    pub name: String,
}

impl Principal {
    /// Build from verified claims; fails when `sub` is not a numeric user id
    pub fn from_claims(claims: Claims) -> Option<Self> {
        let user_id = claims.sub.parse().ok()?;
        Some(Self {
            user_id,
            email: claims.email,
            name: claims.name,
        })
    }
}
