#![allow(dead_code)]

//! Shared test infrastructure for crm-db repository tests

pub mod fixtures;

use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite and the schema applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
