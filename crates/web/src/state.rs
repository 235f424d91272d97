//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::remote::DirectoryApiClient;
use crate::store::{LocalStore, StoreSlot};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; gives handlers access to configuration,
/// the remote directory API client, and the local store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    remote: DirectoryApiClient,
    store: LocalStore,
}

impl AppState {
    /// Create the application state, opening the local store slot.
    pub async fn new(config: AppConfig) -> Self {
        let remote = DirectoryApiClient::new(&config.api_url);
        let store = LocalStore::open(StoreSlot::new(&config.store_path)).await;

        Self {
            inner: Arc::new(AppStateInner {
                config,
                remote,
                store,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the remote directory API client.
    #[must_use]
    pub fn remote(&self) -> &DirectoryApiClient {
        &self.inner.remote
    }

    /// Get a reference to the local store.
    #[must_use]
    pub fn store(&self) -> &LocalStore {
        &self.inner.store
    }
}
