use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on {constraint} {location}")]
    UniqueViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    /// Map a sqlx error, folding unique-constraint failures into a
    /// dedicated variant so callers can surface them as conflicts.
    #[track_caller]
    pub fn from_write_error(source: sqlx::Error, constraint: &str) -> Self {
        if let sqlx::Error::Database(ref db) = source {
            if db.is_unique_violation() {
                return Self::UniqueViolation {
                    constraint: constraint.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                };
            }
        }
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
