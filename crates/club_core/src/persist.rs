//! Durable session state and the debounced writer in front of it.
//!
//! Stores are keyed by user id and hold one [`GameSnapshot`] each. A
//! missing row is not an error: it means a fresh game. Writes go through
//! [`DebouncedSaver`], which coalesces bursts of mutations into one
//! upsert after a quiet period.

use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::progress::ProgressBars;

/// The durable slice of a session. In-category position, the prediction
/// and the published score are deliberately not persisted; they are
/// recomputed or re-fetched on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub progress_bars: ProgressBars,
    pub completed_categories: Vec<String>,
    pub points: u32,
    pub category_scores: BTreeMap<String, f64>,
    pub last_completion: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Backing storage for snapshots. Implementations map this onto whatever
/// holds the rows; [`MemoryStore`] is the in-process reference.
pub trait StateStore {
    fn upsert(&mut self, user_id: &str, snapshot: &GameSnapshot) -> Result<()>;
    /// `Ok(None)` means no saved state, which callers treat as a fresh
    /// game rather than an error.
    fn fetch(&self, user_id: &str) -> Result<Option<GameSnapshot>>;
}

/// HashMap-backed store for tests and single-process use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: HashMap<String, GameSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn upsert(&mut self, user_id: &str, snapshot: &GameSnapshot) -> Result<()> {
        self.rows.insert(user_id.to_string(), snapshot.clone());
        Ok(())
    }

    fn fetch(&self, user_id: &str) -> Result<Option<GameSnapshot>> {
        Ok(self.rows.get(user_id).cloned())
    }
}

/// Default quiet period before a pending snapshot is written out.
pub fn default_quiet() -> Duration {
    Duration::seconds(1)
}

/// Write coalescer. Every mutation calls [`DebouncedSaver::mark_dirty`]
/// with the latest snapshot; [`DebouncedSaver::poll`] flushes once the
/// quiet period has elapsed since the first unflushed mark. A failed
/// write is logged and dropped, never retried with stale data.
pub struct DebouncedSaver {
    quiet: Duration,
    pending: Option<(String, GameSnapshot)>,
    dirty_since: Option<DateTime<Utc>>,
}

impl DebouncedSaver {
    pub fn new(quiet: Duration) -> Self {
        DebouncedSaver { quiet, pending: None, dirty_since: None }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces any pending snapshot with the newer one. The quiet timer
    /// starts at the first mark and is not pushed back by later marks, so
    /// a constant stream of mutations still saves once per period.
    pub fn mark_dirty(&mut self, user_id: &str, snapshot: GameSnapshot, now: DateTime<Utc>) {
        self.pending = Some((user_id.to_string(), snapshot));
        if self.dirty_since.is_none() {
            self.dirty_since = Some(now);
        }
    }

    /// Writes the pending snapshot if the quiet period has elapsed.
    /// Returns true when a write was attempted.
    pub fn poll(&mut self, now: DateTime<Utc>, store: &mut dyn StateStore) -> bool {
        let due = match self.dirty_since {
            Some(since) => now - since >= self.quiet,
            None => false,
        };
        if !due {
            return false;
        }
        self.flush(store)
    }

    /// Writes immediately, regardless of the quiet period. Used on
    /// shutdown so the last burst of mutations is not lost.
    pub fn flush(&mut self, store: &mut dyn StateStore) -> bool {
        let (user_id, snapshot) = match self.pending.take() {
            Some(pending) => pending,
            None => return false,
        };
        self.dirty_since = None;
        if let Err(err) = store.upsert(&user_id, &snapshot) {
            log::warn!("state save failed for {user_id}: {err}");
        }
        true
    }
}

impl Default for DebouncedSaver {
    fn default() -> Self {
        Self::new(default_quiet())
    }
}

/// Loads a user's snapshot, treating a missing row as a fresh game.
pub fn load_or_default(
    store: &dyn StateStore,
    user_id: &str,
    fresh: impl FnOnce() -> GameSnapshot,
) -> Result<GameSnapshot> {
    match store.fetch(user_id) {
        Ok(Some(snapshot)) => Ok(snapshot),
        Ok(None) => {
            log::debug!("no saved state for {user_id}, starting fresh");
            Ok(fresh())
        }
        Err(err) => Err(err),
    }
}
