//! In-memory cooldown tracker gating how often a member can earn XP.
//!
//! Entries live only in process memory and are keyed by `(guild_id, user_id)`. Losing them
//! on restart only reopens the cooldown window early; the XP ledger is unaffected. Entries
//! whose window has elapsed are dropped by `prune`, which the scheduler runs every minute,
//! so the map only holds members who earned XP within the last cooldown window.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Last successful award time per `(guild_id, user_id)`.
///
/// Cheap to clone; clones share the same map.
#[derive(Clone, Default)]
pub struct CooldownTracker {
    entries: Arc<RwLock<HashMap<(u64, u64), DateTime<Utc>>>>,
}

impl CooldownTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Passes the gate for a member if their cooldown window has elapsed.
    ///
    /// The check and the timestamp update happen under a single write lock with no await
    /// in between, so two near-simultaneous messages from the same member cannot both pass.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `now` - Time of the attempt
    /// - `cooldown_seconds` - Length of the cooldown window
    ///
    /// # Returns
    /// - `true` - No prior entry, or at least `cooldown_seconds` have passed since it; `now`
    ///   is recorded as the new last-award time
    /// - `false` - Still cooling down; the entry is left unchanged
    pub async fn try_acquire(
        &self,
        guild_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
        cooldown_seconds: u64,
    ) -> bool {
        let mut entries = self.entries.write().await;
        let key = (guild_id, user_id);

        if let Some(last) = entries.get(&key) {
            if !window_elapsed(*last, now, cooldown_seconds) {
                return false;
            }
        }

        entries.insert(key, now);
        true
    }

    /// Drops entries whose cooldown window has elapsed at `now`.
    ///
    /// A pruned member would pass the gate anyway, so pruning never changes the outcome of
    /// `try_acquire`.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub async fn prune(&self, now: DateTime<Utc>, cooldown_seconds: u64) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();

        entries.retain(|_, last| !window_elapsed(*last, now, cooldown_seconds));

        before - entries.len()
    }

    /// Number of members currently tracked.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Millisecond comparison; a clock that moved backwards keeps the window closed.
fn window_elapsed(last: DateTime<Utc>, now: DateTime<Utc>, cooldown_seconds: u64) -> bool {
    let window_ms = i64::try_from(cooldown_seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000);

    (now - last).num_milliseconds() >= window_ms
}
