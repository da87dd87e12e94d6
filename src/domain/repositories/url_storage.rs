//! Storage contract for alias → URL mappings.

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a [`UrlStorage`] call.
///
/// Every variant carries the name of the operation that produced it so the
/// handler log line says where the failure happened.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{op}: alias {alias:?} not found")]
    NotFound { op: &'static str, alias: String },

    #[error("{op}: alias {alias:?} already exists")]
    DuplicateAlias { op: &'static str, alias: String },

    #[error("{op}: storage unavailable: {source}")]
    Unavailable {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StorageError {
    /// Returns true for [`StorageError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for [`StorageError::DuplicateAlias`].
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateAlias { .. })
    }
}

/// Persistence interface for URL mappings.
///
/// Each method is a single statement against the backing store; there are no
/// transactions spanning calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PostgresStorage`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStorage: Send + Sync {
    /// Stores a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DuplicateAlias`] if the alias is taken and
    /// [`StorageError::Unavailable`] on database errors.
    async fn create_mapping(&self, target_url: &str, alias: &str) -> Result<(), StorageError>;

    /// Resolves an alias to its target URL by exact match.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists and
    /// [`StorageError::Unavailable`] on database errors.
    async fn get_mapping(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the mapping for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if nothing was deleted and
    /// [`StorageError::Unavailable`] on database errors.
    async fn delete_mapping(&self, alias: &str) -> Result<(), StorageError>;

    /// Checks that the backing store answers queries.
    async fn ping(&self) -> Result<(), StorageError>;
}
