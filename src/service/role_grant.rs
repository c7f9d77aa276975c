//! Role-granting collaborator used by the award engine.
//!
//! `RoleGrant` abstracts the two Discord calls the award engine needs so the engine can be
//! exercised against an in-memory double in tests. `DiscordRoleGrant` is the production
//! implementation over Serenity's HTTP client.

use serenity::all::{GuildId, RoleId, UserId};
use serenity::async_trait;
use serenity::http::{Http, HttpError};
use std::sync::Arc;

use crate::error::AppError;

/// Member lookup and role assignment within a guild.
#[async_trait]
pub trait RoleGrant: Send + Sync {
    /// Fetches the role IDs currently held by a member.
    ///
    /// # Returns
    /// - `Ok(Some(roles))` - Member found
    /// - `Ok(None)` - Member is not (or no longer) in the guild
    /// - `Err(AppError)` - Lookup failed
    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<Option<Vec<u64>>, AppError>;

    /// Adds a role to a member, recording `reason` in the guild's audit log.
    async fn add_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError>;
}

/// `RoleGrant` backed by the Discord HTTP API.
pub struct DiscordRoleGrant {
    http: Arc<Http>,
}

impl DiscordRoleGrant {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RoleGrant for DiscordRoleGrant {
    async fn member_roles(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Vec<u64>>, AppError> {
        match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => Ok(Some(member.roles.iter().map(|r| r.get()).collect())),
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == 404 =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn add_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        Ok(())
    }
}
