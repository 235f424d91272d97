//! Cache types for remote directory API responses.

use crewlist_core::RemoteUserId;

use super::types::RemoteUser;

/// Cache key for directory API lookups.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Users,
    User(RemoteUserId),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Users(Vec<RemoteUser>),
    User(Box<RemoteUser>),
}
