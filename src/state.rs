//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::domain::repositories::UrlStorage;

/// State cloned into every request.
///
/// The storage handle is the only shared resource; it is safe for concurrent
/// use because the pool behind it is.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn UrlStorage>,
}

impl AppState {
    /// Creates application state around a storage implementation.
    pub fn new(storage: Arc<dyn UrlStorage>) -> Self {
        Self { storage }
    }
}
