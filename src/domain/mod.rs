//! Domain layer: the storage contract handlers are written against.
//!
//! The domain layer has no dependency on the HTTP or infrastructure layers.
//! [`repositories::UrlStorage`] is implemented by
//! [`crate::infrastructure::persistence::PostgresStorage`] and mocked in tests.

pub mod repositories;
