//! XP ledger repository.
//!
//! This module provides the `UserXpRepository` for reading and writing the per-member XP
//! records keyed by `(guild_id, user_id)`. Writes are single-statement upserts so `xp` and
//! `level` always change together. There is no optimistic concurrency control: concurrent
//! writers for the same member resolve as last write wins.
//!
//! The `xp` column is a signed 64-bit integer, so totals above `MAX_STORED_XP` cannot be
//! stored. Callers clamp before resolving the level so the stored pair stays consistent.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::xp::{UpsertUserXpParam, UserXp, XpStanding};

/// Largest cumulative XP the ledger can hold.
pub const MAX_STORED_XP: u64 = i64::MAX as u64;

/// Repository providing database operations for the XP ledger.
pub struct UserXpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserXpRepository<'a> {
    /// Creates a new UserXpRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserXpRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the XP record of a member.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(UserXp))` - Record found
    /// - `Ok(None)` - Member has never been awarded XP in this guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<UserXp>, DbErr> {
        let entity =
            entity::prelude::UserXp::find_by_id((guild_id.to_string(), user_id.to_string()))
                .one(self.db)
                .await?;

        Ok(entity.map(UserXp::from_entity))
    }

    /// Reads the `{xp, level}` standing of a member.
    ///
    /// Never fails on a missing record; members without one stand at zero XP, level 0.
    ///
    /// # Returns
    /// - `Ok(XpStanding)` - Stored standing, or the zero standing
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_standing(&self, guild_id: u64, user_id: u64) -> Result<XpStanding, DbErr> {
        Ok(self
            .find(guild_id, user_id)
            .await?
            .map(|record| record.standing())
            .unwrap_or_default())
    }

    /// Creates or overwrites the XP record of a member.
    ///
    /// Inserts a new record or, on a `(guild_id, user_id)` conflict, replaces `xp`, `level`
    /// and `updated_at` while keeping `created_at`. `param.xp` must not exceed
    /// `MAX_STORED_XP`; larger values are saturated.
    ///
    /// # Arguments
    /// - `param` - Member keys and the new XP and level
    ///
    /// # Returns
    /// - `Ok(UserXp)` - The record as stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertUserXpParam) -> Result<UserXp, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::UserXp::insert(entity::user_xp::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            xp: ActiveValue::Set(i64::try_from(param.xp).unwrap_or(i64::MAX)),
            level: ActiveValue::Set(i32::try_from(param.level).unwrap_or(i32::MAX)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_xp::Column::GuildId,
                entity::user_xp::Column::UserId,
            ])
            .update_columns([
                entity::user_xp::Column::Xp,
                entity::user_xp::Column::Level,
                entity::user_xp::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(UserXp::from_entity(entity))
    }
}
