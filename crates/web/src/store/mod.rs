//! Local store for user-added records.
//!
//! # Slot: `added_users.json`
//!
//! One named slot holds the serialized array of [`LocalUser`] records;
//! the remote directory API is never written to. [`LocalStore`] is the
//! single owner of that slot for the lifetime of the process: views read
//! through it and all mutation flows through [`LocalStore::create`] and
//! [`LocalStore::remove`]. It is injected into handlers via `AppState`
//! rather than reached through any ambient global.
//!
//! Mutations update the in-memory collection synchronously and then attempt
//! the slot write. A failed write does NOT roll the in-memory state back;
//! the discrepancy is surfaced as a [`StoreNotice`] until the next
//! successful save.

mod slot;

pub use slot::{LoadOutcome, StoreSlot};

use std::sync::{Mutex, RwLock};

use thiserror::Error;
use tokio::sync::watch;
use tracing::warn;

use crewlist_core::UserFormData;

use crate::models::LocalUser;

/// Errors that can occur writing the store slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage rejected the write.
    #[error("store write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the collection failed.
    #[error("store serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A recoverable store condition the operator should see.
///
/// None of these abort anything; they degrade to a visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreNotice {
    /// The slot held data that was not parseable at all; it was discarded.
    Corrupted,
    /// Some stored records were malformed and filtered out.
    PartialLoss { dropped: usize },
    /// The last save did not reach disk; displayed state may not persist.
    SaveFailed,
}

impl core::fmt::Display for StoreNotice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => {
                f.write_str("Stored users could not be read and were discarded.")
            }
            Self::PartialLoss { dropped } => {
                write!(f, "{dropped} stored user record(s) were damaged and skipped.")
            }
            Self::SaveFailed => {
                f.write_str("Saving users failed; recent changes may be lost on restart.")
            }
        }
    }
}

/// The explicit store object owning the locally-added user set.
pub struct LocalStore {
    slot: StoreSlot,
    users: RwLock<Vec<LocalUser>>,
    notice: Mutex<Option<StoreNotice>>,
    tx: watch::Sender<Vec<LocalUser>>,
}

impl LocalStore {
    /// Open the store: load the slot once and take ownership of the set.
    ///
    /// Load damage (corruption, partial loss) is recorded as a pending
    /// notice instead of failing.
    pub async fn open(slot: StoreSlot) -> Self {
        let LoadOutcome { users, notice } = slot.load().await;
        let (tx, _) = watch::channel(users.clone());

        Self {
            slot,
            users: RwLock::new(users),
            notice: Mutex::new(notice),
            tx,
        }
    }

    /// Snapshot of the current collection, in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<LocalUser> {
        self.users.read().expect("store lock poisoned").clone()
    }

    /// Look up a record by its string identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<LocalUser> {
        self.users
            .read()
            .expect("store lock poisoned")
            .iter()
            .find(|user| user.id == *id)
            .cloned()
    }

    /// Subscribe to collection changes.
    ///
    /// The receiver observes the full collection after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<LocalUser>> {
        self.tx.subscribe()
    }

    /// Take the pending notice, if any, clearing it.
    #[must_use]
    pub fn take_notice(&self) -> Option<StoreNotice> {
        self.notice.lock().expect("store lock poisoned").take()
    }

    /// Create a new local user from a validated submission.
    ///
    /// The record is appended in memory synchronously, then the full
    /// collection is saved. The created record is returned either way;
    /// a failed save is returned alongside it and recorded as a pending
    /// [`StoreNotice::SaveFailed`].
    pub async fn create(&self, data: UserFormData) -> (LocalUser, Result<(), StoreError>) {
        let user = LocalUser::from_form(data);

        let snapshot = {
            let mut users = self.users.write().expect("store lock poisoned");
            users.push(user.clone());
            users.clone()
        };
        self.tx.send_replace(snapshot.clone());

        let saved = self.persist(&snapshot).await;
        (user, saved)
    }

    /// Remove a local user by identifier.
    ///
    /// A missing identifier is a no-op, not an error; the slot is only
    /// rewritten when the collection actually changed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the collection changed but the save was
    /// rejected (the in-memory removal stands regardless).
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let snapshot = {
            let mut users = self.users.write().expect("store lock poisoned");
            let before = users.len();
            users.retain(|user| user.id != *id);
            if users.len() == before {
                return Ok(());
            }
            users.clone()
        };
        self.tx.send_replace(snapshot.clone());

        self.persist(&snapshot).await
    }

    async fn persist(&self, snapshot: &[LocalUser]) -> Result<(), StoreError> {
        match self.slot.save(snapshot).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(error = %e, "store save failed; in-memory state kept");
                *self.notice.lock().expect("store lock poisoned") =
                    Some(StoreNotice::SaveFailed);
                Err(e)
            }
        }
    }
}
