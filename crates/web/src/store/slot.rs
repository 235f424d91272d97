//! The persistent slot: one JSON file holding the full array of
//! locally-added users.
//!
//! Every save is a full overwrite; there are no partial or append writes.
//! Loads never hard-fail: missing data degrades to an empty set and damaged
//! data degrades to whatever subset still parses, with the damage reported
//! as a [`StoreNotice`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::models::LocalUser;

use super::{StoreError, StoreNotice};

/// Result of loading the slot: the surviving records plus any recoverable
/// condition encountered on the way.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub users: Vec<LocalUser>,
    pub notice: Option<StoreNotice>,
}

/// A single named slot on disk.
#[derive(Debug, Clone)]
pub struct StoreSlot {
    path: PathBuf,
}

impl StoreSlot {
    /// Create a slot handle for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the slot contents.
    ///
    /// - Missing file: empty set, no notice.
    /// - Unreadable or unparseable file: the data is discarded wholesale
    ///   and `StoreNotice::Corrupted` is reported.
    /// - Individually malformed elements (missing field, wrong type): those
    ///   elements are dropped and `StoreNotice::PartialLoss` is reported.
    pub async fn load(&self) -> LoadOutcome {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store slot unreadable, discarding");
                return LoadOutcome {
                    users: Vec::new(),
                    notice: Some(StoreNotice::Corrupted),
                };
            }
        };

        let raw: Vec<serde_json::Value> = match serde_json::from_str(&text) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store slot corrupted, discarding");
                return LoadOutcome {
                    users: Vec::new(),
                    notice: Some(StoreNotice::Corrupted),
                };
            }
        };

        let total = raw.len();
        let users: Vec<LocalUser> = raw
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect();

        let dropped = total - users.len();
        let notice = if dropped > 0 {
            warn!(path = %self.path.display(), dropped, "store slot held malformed records");
            Some(StoreNotice::PartialLoss { dropped })
        } else {
            None
        };

        LoadOutcome { users, notice }
    }

    /// Overwrite the slot with the full collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` if encoding fails and
    /// `StoreError::Io` if the write is rejected (missing permissions,
    /// exhausted disk, ...).
    pub async fn save(&self, users: &[LocalUser]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let text = serde_json::to_string_pretty(users)?;
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }
}
