//! Storage trait definitions for the domain layer.
//!
//! The trait defines the contract handlers depend on; the PostgreSQL
//! implementation lives in `crate::infrastructure::persistence`. A mock is
//! generated via `mockall` for unit tests.

pub mod url_storage;

pub use url_storage::{StorageError, UrlStorage};

#[cfg(test)]
pub use url_storage::MockUrlStorage;
