#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url_alias::api::middleware::auth::BasicCredentials;
use url_alias::domain::repositories::{StorageError, UrlStorage};
use url_alias::routes::router;
use url_alias::state::AppState;

/// In-memory storage with the same error semantics as PostgreSQL, counting
/// every call it receives.
#[derive(Default)]
pub struct MemoryStorage {
    mappings: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
}

impl MemoryStorage {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.mappings.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlStorage for MemoryStorage {
    async fn create_mapping(&self, target_url: &str, alias: &str) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut mappings = self.mappings.lock().unwrap();
        if mappings.contains_key(alias) {
            return Err(StorageError::DuplicateAlias {
                op: "memory.create_mapping",
                alias: alias.to_string(),
            });
        }
        mappings.insert(alias.to_string(), target_url.to_string());
        Ok(())
    }

    async fn get_mapping(&self, alias: &str) -> Result<String, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.mappings
            .lock()
            .unwrap()
            .get(alias)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                op: "memory.get_mapping",
                alias: alias.to_string(),
            })
    }

    async fn delete_mapping(&self, alias: &str) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.mappings
            .lock()
            .unwrap()
            .remove(alias)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                op: "memory.delete_mapping",
                alias: alias.to_string(),
            })
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

pub fn create_test_server() -> (TestServer, Arc<MemoryStorage>) {
    create_test_server_with_auth(None)
}

pub fn create_test_server_with_auth(
    credentials: Option<BasicCredentials>,
) -> (TestServer, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::default());
    let state = AppState::new(storage.clone());
    let server = TestServer::new(router(state, credentials)).unwrap();

    (server, storage)
}
