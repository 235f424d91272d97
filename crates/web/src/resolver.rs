//! Profile resolution: local store first, remote API as fallback.

use thiserror::Error;

use crewlist_core::RemoteUserId;

use crate::models::LocalUser;
use crate::remote::{DirectoryApiClient, RemoteError, RemoteUser};
use crate::store::LocalStore;

/// A resolved profile, from whichever source satisfied the lookup.
#[derive(Debug, Clone)]
pub enum ResolvedUser {
    Local(LocalUser),
    Remote(RemoteUser),
}

/// Why a profile lookup failed.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither the local store nor the remote API knows this identifier.
    #[error("user {0} not found")]
    NotFound(String),

    /// The remote fetch failed (transport or server error).
    #[error("failed to fetch user: {0}")]
    FetchFailed(#[from] RemoteError),
}

/// Resolve a user by identifier.
///
/// The local store is consulted first by string equality; on a hit the
/// record is returned without any remote call. Otherwise the identifier is
/// interpreted as a remote numeric id and fetched. A store that loaded
/// damaged simply yields no local match here; it never turns the lookup
/// into a fatal error.
///
/// # Errors
///
/// Returns `ResolveError::NotFound` when the id matches nothing on either
/// side (including non-numeric ids unknown to the store) and
/// `ResolveError::FetchFailed` when the remote call itself fails.
pub async fn resolve(
    store: &LocalStore,
    client: &DirectoryApiClient,
    id: &str,
) -> Result<ResolvedUser, ResolveError> {
    if let Some(user) = store.find(id) {
        return Ok(ResolvedUser::Local(user));
    }

    // Remote ids are numeric; anything else cannot exist on the remote side.
    let Ok(numeric) = id.parse::<i64>() else {
        return Err(ResolveError::NotFound(id.to_owned()));
    };

    match client.get_user(RemoteUserId::new(numeric)).await {
        Ok(user) => Ok(ResolvedUser::Remote(user)),
        Err(RemoteError::NotFound(_)) => Err(ResolveError::NotFound(id.to_owned())),
        Err(e) => Err(ResolveError::FetchFailed(e)),
    }
}
