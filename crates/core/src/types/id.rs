//! Newtype IDs for type-safe user references.
//!
//! Remote records carry numeric identifiers assigned by the directory API;
//! locally-created records carry generated string identifiers. Keeping the
//! two as distinct types makes the namespaces disjoint by construction, so
//! an aggregated list never needs to de-duplicate across sources.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a user owned by the remote directory API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteUserId(i64);

impl RemoteUserId {
    /// Create an ID from its wire value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for RemoteUserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RemoteUserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier of a locally-created user.
///
/// Generated as a UUID v4 string, never assigned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalUserId(String);

impl LocalUserId {
    /// Generate a fresh globally-unique ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing ID string (e.g., read back from the store slot).
    #[must_use]
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LocalUserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for LocalUserId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = LocalUserId::generate();
        let b = LocalUserId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn local_id_compares_against_str() {
        let id = LocalUserId::from_string("abc-123".to_owned());
        assert!(id == *"abc-123");
        assert!(id != *"abc-124");
    }

    #[test]
    fn remote_id_displays_wire_value() {
        assert_eq!(RemoteUserId::new(7).to_string(), "7");
    }
}
