//! Bot state shared across all event handlers.
//!
//! `BotState` is created once at startup, handed to the Serenity event handler and the
//! cooldown prune job, and dropped when the process exits. It replaces ambient globals:
//! the cooldown map and the XP options live here and nowhere else.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{config::XpConfig, service::cooldown::CooldownTracker};

/// Shared resources for event handlers and scheduled jobs.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `CooldownTracker` shares its map through an `Arc`
/// - `Arc<XpConfig>` is a reference-counted pointer
#[derive(Clone)]
pub struct BotState {
    /// Database connection pool backing the XP ledger.
    pub db: DatabaseConnection,

    /// Last-award timestamps gating message XP.
    pub cooldowns: CooldownTracker,

    /// XP system options loaded at startup.
    pub xp: Arc<XpConfig>,
}

impl BotState {
    /// Creates the state with an empty cooldown tracker.
    pub fn new(db: DatabaseConnection, xp: XpConfig) -> Self {
        Self {
            db,
            cooldowns: CooldownTracker::new(),
            xp: Arc::new(xp),
        }
    }
}
