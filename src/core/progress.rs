//! # Progress Store
//!
//! The only state that persists across sessions: which devotionals the
//! user has read, which weeks they have reflected on, and which
//! devotionals they have bookmarked.
//!
//! The store loads eagerly at construction and commits the full
//! `UserProgress` structure back to durable storage after every
//! mutation, so the in-memory value and the stored value never drift
//! past a single operation. A missing or corrupt stored value falls
//! back to the seed defaults rather than failing.

use std::collections::BTreeSet;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::store::KeyValueStore;

/// Storage key for the JSON-encoded [`UserProgress`].
pub const PROGRESS_KEY: &str = "userProgress";
/// Storage key for the one-shot onboarding flag.
pub const WELCOME_KEY: &str = "hasSeenWelcome";

/// Membership sets for read/reflected/bookmarked ids.
///
/// Sets are ordered so the JSON encoding is deterministic; semantics
/// are membership-only (no duplicates, no ordering guarantees exposed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub read: BTreeSet<String>,
    pub reflected: BTreeSet<String>,
    pub bookmarked: BTreeSet<String>,
}

impl UserProgress {
    /// Seed state for a fresh install.
    pub fn seed() -> Self {
        fn ids(values: &[&str]) -> BTreeSet<String> {
            values.iter().map(|s| s.to_string()).collect()
        }
        Self {
            read: ids(&["1", "2", "3"]),
            reflected: ids(&["1", "2"]),
            bookmarked: ids(&["1", "4"]),
        }
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::seed()
    }
}

/// Owns [`UserProgress`] and its persistence. Screens read through
/// [`ProgressStore::progress`] and mutate through the operations below;
/// they never hold a private copy.
pub struct ProgressStore {
    progress: UserProgress,
    store: Box<dyn KeyValueStore>,
}

impl ProgressStore {
    /// Load progress from `store`, falling back to seed defaults when
    /// nothing is stored or the stored value does not parse.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let progress = match store.get(PROGRESS_KEY) {
            Some(json) => match serde_json::from_str(&json) {
                Ok(progress) => progress,
                Err(e) => {
                    warn!("Stored progress is corrupt, using defaults: {}", e);
                    UserProgress::seed()
                }
            },
            None => {
                info!("No stored progress, starting from seed defaults");
                UserProgress::seed()
            }
        };
        Self { progress, store }
    }

    /// Read-only view of the current progress.
    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn is_read(&self, id: &str) -> bool {
        self.progress.read.contains(id)
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.progress.bookmarked.contains(id)
    }

    pub fn is_reflected(&self, week_number: u32) -> bool {
        self.progress.reflected.contains(&week_number.to_string())
    }

    /// Symmetric toggle: removes `id` from the bookmarks if present,
    /// adds it otherwise. Returns the new membership state.
    pub fn toggle_bookmark(&mut self, id: &str) -> bool {
        let added = if self.progress.bookmarked.contains(id) {
            self.progress.bookmarked.remove(id);
            false
        } else {
            self.progress.bookmarked.insert(id.to_string());
            true
        };
        self.persist();
        added
    }

    /// Adds `id` to the read set. Idempotent; membership is never
    /// revoked by this operation.
    pub fn mark_as_read(&mut self, id: &str) {
        if self.progress.read.insert(id.to_string()) {
            self.persist();
        }
    }

    /// Marks the week's reflection as completed. Idempotent, monotonic.
    pub fn mark_as_reflected(&mut self, week_number: u32) {
        if self.progress.reflected.insert(week_number.to_string()) {
            self.persist();
        }
    }

    /// Whether the onboarding overlay has already been dismissed.
    pub fn has_seen_welcome(&self) -> bool {
        self.store.get(WELCOME_KEY).as_deref() == Some("true")
    }

    /// Record onboarding dismissal. Written once; subsequent calls are
    /// harmless rewrites of the same value.
    pub fn mark_welcome_seen(&mut self) {
        if let Err(e) = self.store.set(WELCOME_KEY, "true") {
            warn!("Failed to store welcome flag: {}", e);
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.progress) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode progress: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(PROGRESS_KEY, &json) {
            // In-memory state stays authoritative for the session.
            warn!("Failed to store progress: {}", e);
        }
    }
}
