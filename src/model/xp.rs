//! Domain models for the XP ledger and award engine.

use chrono::{DateTime, Utc};

/// XP ledger record of a member within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct UserXp {
    /// Discord guild ID (stored as String).
    pub guild_id: String,
    /// Discord user ID (stored as String).
    pub user_id: String,
    /// Cumulative XP ever earned in the guild.
    pub xp: u64,
    /// Level derived from `xp`, persisted for fast reads.
    pub level: u32,
    /// Timestamp of the first award.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent write.
    pub updated_at: DateTime<Utc>,
}

impl UserXp {
    /// Converts an entity model to a user XP domain model at the repository boundary.
    ///
    /// Negative values can only come from manual edits to the table and are read as zero.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `UserXp` - The converted domain model
    pub fn from_entity(entity: entity::user_xp::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            user_id: entity.user_id,
            xp: u64::try_from(entity.xp).unwrap_or(0),
            level: u32::try_from(entity.level).unwrap_or(0),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn standing(&self) -> XpStanding {
        XpStanding {
            xp: self.xp,
            level: self.level,
        }
    }
}

/// The `{xp, level}` pair read from the ledger.
///
/// Members without a record have the default standing of zero XP at level 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XpStanding {
    pub xp: u64,
    pub level: u32,
}

/// Parameters for writing a member's XP record.
///
/// Creates the record if none exists for `(guild_id, user_id)`, otherwise overwrites
/// `xp` and `level` (last write wins).
#[derive(Debug, Clone)]
pub struct UpsertUserXpParam {
    /// Discord guild ID.
    pub guild_id: u64,
    /// Discord user ID.
    pub user_id: u64,
    /// New cumulative XP.
    pub xp: u64,
    /// Level matching `xp`.
    pub level: u32,
}

/// Position of a cumulative XP total on the level curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    /// Highest level whose cumulative threshold is at or below the total.
    pub level: u32,
    /// XP earned since reaching `level`.
    pub into_level_xp: u64,
    /// XP cost of advancing from `level` to `level + 1`.
    pub to_next: u64,
}

/// Result of a single XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardOutcome {
    /// Cumulative XP after the award.
    pub xp: u64,
    /// Level stored after the award.
    pub level: u32,
    /// Whether the award moved the member past the previously stored level.
    pub leveled_up: bool,
    /// XP earned since reaching `level`.
    pub into_level_xp: u64,
    /// XP cost of the next level.
    pub to_next: u64,
}

/// A member's current standing resolved against the level curve, for rank displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpProgress {
    pub xp: u64,
    pub level: u32,
    pub into_level_xp: u64,
    pub to_next: u64,
}
