//! PostgreSQL storage implementation.
//!
//! Concrete implementation of [`crate::domain::repositories::UrlStorage`] using
//! SQLx parameterized queries.

pub mod postgres_storage;

pub use postgres_storage::{PoolSettings, PostgresStorage};
