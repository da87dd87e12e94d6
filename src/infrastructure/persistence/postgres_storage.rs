//! PostgreSQL implementation of the URL storage.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::{StorageError, UrlStorage};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        alias VARCHAR(255) PRIMARY KEY,
        url TEXT NOT NULL
    )
"#;

// Redundant with the primary key, kept so existing databases match.
const CREATE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url (alias)";

/// Connection pool sizing passed to [`PgPoolOptions`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// PostgreSQL storage for alias mappings.
///
/// Uses parameterized statements against the single `url` table.
pub struct PostgresStorage {
    pool: Arc<PgPool>,
}

impl PostgresStorage {
    /// Wraps an existing pool. The schema is not touched; call
    /// [`Self::init_schema`] if the table may be missing.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a pool to `database_url` and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the connection or the schema
    /// setup fails.
    pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<Self, StorageError> {
        const OP: &str = "storage.postgres.connect";

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .max_lifetime(settings.max_lifetime)
            .connect(database_url)
            .await
            .map_err(|source| StorageError::Unavailable { op: OP, source })?;

        let storage = Self::new(Arc::new(pool));
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Creates the `url` table and its alias index when absent. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] on database errors.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.postgres.init_schema";

        for statement in [CREATE_TABLE, CREATE_INDEX] {
            sqlx::query(statement)
                .execute(self.pool.as_ref())
                .await
                .map_err(|source| StorageError::Unavailable { op: OP, source })?;
        }

        Ok(())
    }

    /// Returns the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UrlStorage for PostgresStorage {
    async fn create_mapping(&self, target_url: &str, alias: &str) -> Result<(), StorageError> {
        const OP: &str = "storage.postgres.create_mapping";

        sqlx::query("INSERT INTO url (alias, url) VALUES ($1, $2)")
            .bind(alias)
            .bind(target_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(OP, alias, e))?;

        Ok(())
    }

    async fn get_mapping(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.postgres.get_mapping";

        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(OP, alias, e))?;

        url.ok_or_else(|| StorageError::NotFound {
            op: OP,
            alias: alias.to_string(),
        })
    }

    async fn delete_mapping(&self, alias: &str) -> Result<(), StorageError> {
        const OP: &str = "storage.postgres.delete_mapping";

        let result = sqlx::query("DELETE FROM url WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(OP, alias, e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                op: OP,
                alias: alias.to_string(),
            });
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.postgres.ping";

        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(|source| StorageError::Unavailable { op: OP, source })?;

        Ok(())
    }
}

/// Maps a SQLx error to a [`StorageError`], recognising unique violations.
fn map_sqlx_error(op: &'static str, alias: &str, e: sqlx::Error) -> StorageError {
    if is_unique_violation(&e) {
        return StorageError::DuplicateAlias {
            op,
            alias: alias.to_string(),
        };
    }

    StorageError::Unavailable { op, source: e }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_unavailable() {
        let err = map_sqlx_error("storage.postgres.get_mapping", "ex", sqlx::Error::PoolClosed);
        assert!(matches!(err, StorageError::Unavailable { .. }));
    }

    #[test]
    fn test_row_not_found_is_not_a_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn test_default_pool_settings() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, 10);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(30));
    }
}
