//! Remote directory API client.
//!
//! # Architecture
//!
//! - The remote collaborator is a read-only REST directory (jsonplaceholder
//!   schema): `GET /users` and `GET /users/{id}`
//! - The remote API is the source of truth for its records - no local sync
//! - In-memory caching via `moka` for API responses (5 minute TTL)
//! - No automatic retry: a failed fetch surfaces to the page and the
//!   operator reloads

mod cache;
pub mod types;

pub use types::{Address, Company, Geo, RemoteUser};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crewlist_core::RemoteUserId;

use cache::{CacheKey, CacheValue};

/// Errors that can occur when talking to the remote directory API.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP request failed (connect, timeout, or body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an unexpected status code.
    #[error("directory API returned status {0}")]
    Status(reqwest::StatusCode),

    /// The requested user does not exist on the remote side.
    #[error("remote user {0} not found")]
    NotFound(RemoteUserId),
}

/// Client for the remote read-only directory API.
///
/// Cheaply cloneable; listings and single records are cached for 5 minutes.
#[derive(Clone)]
pub struct DirectoryApiClient {
    inner: Arc<DirectoryApiClientInner>,
}

struct DirectoryApiClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl DirectoryApiClient {
    /// Create a new directory API client.
    #[must_use]
    pub fn new(api_url: &Url) -> Self {
        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(DirectoryApiClientInner {
                client: reqwest::Client::new(),
                base_url: api_url.as_str().trim_end_matches('/').to_owned(),
                cache,
            }),
        }
    }

    /// Fetch the full user listing.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Http` on transport failure and
    /// `RemoteError::Status` on a non-success response.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<RemoteUser>, RemoteError> {
        if let Some(CacheValue::Users(users)) = self.inner.cache.get(&CacheKey::Users).await {
            debug!("user listing served from cache");
            return Ok(users);
        }

        let url = format!("{}/users", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let users: Vec<RemoteUser> = response.json().await?;
        debug!(count = users.len(), "fetched user listing");

        self.inner
            .cache
            .insert(CacheKey::Users, CacheValue::Users(users.clone()))
            .await;

        Ok(users)
    }

    /// Fetch a single user by its remote numeric id.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` on a 404, `RemoteError::Status` on
    /// other non-success responses, and `RemoteError::Http` on transport
    /// failure.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: RemoteUserId) -> Result<RemoteUser, RemoteError> {
        if let Some(CacheValue::User(user)) = self.inner.cache.get(&CacheKey::User(id)).await {
            debug!(%id, "user served from cache");
            return Ok(*user);
        }

        let url = format!("{}/users/{}", self.inner.base_url, id);
        let response = self.inner.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound(id));
        }
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let user: RemoteUser = response.json().await?;

        self.inner
            .cache
            .insert(CacheKey::User(id), CacheValue::User(Box::new(user.clone())))
            .await;

        Ok(user)
    }
}
