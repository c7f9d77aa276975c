//! XP ledger factory for creating test `user_xp` rows.
//!
//! The factory writes `xp` and `level` exactly as given; it does not derive the level
//! from the XP total, so tests can seed stale or hand-picked standings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test XP ledger rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_xp::UserXpFactory;
///
/// let record = UserXpFactory::new(&db)
///     .guild_id(1)
///     .user_id(2)
///     .xp(100)
///     .level(1)
///     .build()
///     .await?;
/// ```
pub struct UserXpFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    user_id: u64,
    xp: i64,
    level: i32,
}

impl<'a> UserXpFactory<'a> {
    /// Creates a new UserXpFactory with default values.
    ///
    /// Defaults:
    /// - guild_id / user_id: unique auto-incremented ids
    /// - xp: `0`
    /// - level: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            user_id: next_id(),
            xp: 0,
            level: 0,
        }
    }

    /// Sets the Discord guild ID of the row.
    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the Discord user ID of the row.
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the cumulative XP of the row.
    pub fn xp(mut self, xp: i64) -> Self {
        self.xp = xp;
        self
    }

    /// Sets the stored level of the row.
    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Inserts the row into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted `user_xp` row
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate key)
    pub async fn build(self) -> Result<entity::user_xp::Model, DbErr> {
        let now = Utc::now();

        entity::user_xp::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            user_id: ActiveValue::Set(self.user_id.to_string()),
            xp: ActiveValue::Set(self.xp),
            level: ActiveValue::Set(self.level),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `user_xp` row with default values (fresh ids, zero XP, level 0).
pub async fn create_user_xp(db: &DatabaseConnection) -> Result<entity::user_xp::Model, DbErr> {
    UserXpFactory::new(db).build().await
}
