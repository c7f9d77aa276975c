//! XP award engine.
//!
//! `XpService` orchestrates a single award: read the member's standing from the ledger, add
//! the rolled amount, resolve the new total on the level curve, persist, and on a level-up
//! hand out the configured role once the target level is reached.
//!
//! The ledger read-modify-write is not isolated. Two awards racing for the same member can
//! lose one delta (last write wins). The cooldown gate in front of the message handler makes
//! this rare, and leveling data is cosmetic, so no per-member serialization is attempted.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    config::XpConfig,
    data::user_xp::{UserXpRepository, MAX_STORED_XP},
    error::AppError,
    model::xp::{AwardOutcome, UpsertUserXpParam, XpProgress},
    service::{level_curve, role_grant::RoleGrant},
};

pub struct XpService<'a> {
    db: &'a DatabaseConnection,
    roles: &'a dyn RoleGrant,
    config: &'a XpConfig,
}

impl<'a> XpService<'a> {
    pub fn new(db: &'a DatabaseConnection, roles: &'a dyn RoleGrant, config: &'a XpConfig) -> Self {
        Self { db, roles, config }
    }

    /// Awards XP to a member and reports the resulting standing.
    ///
    /// The ledger is written exactly once per call. The stored level only moves up when the
    /// new total resolves past it, in which case the level role is granted if configured.
    /// Role grant problems are logged and never affect the returned outcome. Totals stop
    /// growing at `MAX_STORED_XP`.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `amount` - XP to add
    ///
    /// # Returns
    /// - `Ok(AwardOutcome)` - New total, stored level, level-up flag and progress in level
    /// - `Err(AppError::DbErr)` - Ledger read or write failed; nothing was written
    pub async fn award(
        &self,
        guild_id: u64,
        user_id: u64,
        amount: u64,
    ) -> Result<AwardOutcome, AppError> {
        let repo = UserXpRepository::new(self.db);

        let standing = repo.get_standing(guild_id, user_id).await?;
        let new_xp = standing.xp.saturating_add(amount).min(MAX_STORED_XP);
        let calc = level_curve::resolve(new_xp);

        if calc.level > standing.level {
            repo.upsert(UpsertUserXpParam {
                guild_id,
                user_id,
                xp: new_xp,
                level: calc.level,
            })
            .await?;

            tracing::info!(
                "User {} reached level {} in guild {} ({} XP)",
                user_id,
                calc.level,
                guild_id,
                new_xp
            );

            self.grant_level_role(guild_id, user_id, calc.level).await;

            return Ok(AwardOutcome {
                xp: new_xp,
                level: calc.level,
                leveled_up: true,
                into_level_xp: calc.into_level_xp,
                to_next: calc.to_next,
            });
        }

        repo.upsert(UpsertUserXpParam {
            guild_id,
            user_id,
            xp: new_xp,
            level: standing.level,
        })
        .await?;

        tracing::debug!(
            "Awarded {} XP to user {} in guild {} ({} total)",
            amount,
            user_id,
            guild_id,
            new_xp
        );

        Ok(AwardOutcome {
            xp: new_xp,
            level: standing.level,
            leveled_up: false,
            into_level_xp: calc.into_level_xp,
            to_next: calc.to_next,
        })
    }

    /// Places a member exactly at the start of a level.
    ///
    /// Overwrites the member's XP with the cumulative threshold of `level`, which may lower
    /// it. Administrative override; no role is granted. Thresholds above `MAX_STORED_XP` are
    /// clamped to it and the stored level is the one that total resolves to.
    ///
    /// # Returns
    /// - `Ok(u64)` - The cumulative XP now stored
    /// - `Err(AppError::DbErr)` - Ledger write failed
    pub async fn force_set_level(
        &self,
        guild_id: u64,
        user_id: u64,
        level: u32,
    ) -> Result<u64, AppError> {
        let total = level_curve::total_for_level(level).min(MAX_STORED_XP);
        // Only differs from `level` when the threshold exceeds what the ledger can hold
        let stored_level = level_curve::resolve(total).level;

        UserXpRepository::new(self.db)
            .upsert(UpsertUserXpParam {
                guild_id,
                user_id,
                xp: total,
                level: stored_level,
            })
            .await?;

        tracing::info!(
            "Forced user {} to level {} in guild {} ({} XP)",
            user_id,
            stored_level,
            guild_id,
            total
        );

        Ok(total)
    }

    /// Reads a member's standing and resolves it on the level curve.
    ///
    /// Members without a record report zero XP at level 0.
    pub async fn progress(&self, guild_id: u64, user_id: u64) -> Result<XpProgress, AppError> {
        let standing = UserXpRepository::new(self.db)
            .get_standing(guild_id, user_id)
            .await?;
        let calc = level_curve::resolve(standing.xp);

        Ok(XpProgress {
            xp: standing.xp,
            level: standing.level,
            into_level_xp: calc.into_level_xp,
            to_next: calc.to_next,
        })
    }

    /// Grants the configured level role if `level` reached the target and the member lacks it.
    async fn grant_level_role(&self, guild_id: u64, user_id: u64, level: u32) {
        let Some(role_id) = self.config.role_id_to_grant else {
            return;
        };
        if level < self.config.level_target_for_role {
            return;
        }

        let roles = match self.roles.member_roles(guild_id, user_id).await {
            Ok(Some(roles)) => roles,
            Ok(None) => {
                tracing::warn!(
                    "Cannot grant role {} to user {}: not a member of guild {}",
                    role_id,
                    user_id,
                    guild_id
                );
                return;
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch member {} in guild {} for role grant: {}",
                    user_id,
                    guild_id,
                    e
                );
                return;
            }
        };

        if roles.contains(&role_id) {
            tracing::debug!("User {} already has role {}", user_id, role_id);
            return;
        }

        let reason = format!("Reached level {} (XP system)", level);
        match self
            .roles
            .add_role(guild_id, user_id, role_id, &reason)
            .await
        {
            Ok(()) => tracing::info!(
                "Granted role {} to user {} in guild {}",
                role_id,
                user_id,
                guild_id
            ),
            Err(e) => tracing::warn!(
                "Failed to grant role {} to user {} in guild {}: {}",
                role_id,
                user_id,
                guild_id,
                e
            ),
        }
    }
}

/// Rolls the XP amount for one message using the configured range.
pub fn random_xp(config: &XpConfig) -> u64 {
    random_xp_with(&mut rand::rng(), config.min, config.max)
}

/// Rolls a uniform amount in the normalized `[min, max]` range.
///
/// The lower bound is clamped to zero and the upper bound to at least the lower bound, so a
/// misconfigured range such as `min = 30, max = 10` always yields 30.
pub fn random_xp_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> u64 {
    let (min, max) = roll_bounds(min, max);
    rng.random_range(min..=max)
}

fn roll_bounds(min: i64, max: i64) -> (u64, u64) {
    let min = min.max(0);
    let max = max.max(min);

    (min as u64, max as u64)
}

#[cfg(test)]
mod test;
