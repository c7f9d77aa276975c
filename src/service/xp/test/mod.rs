
use super::*;
use crate::{
    data::user_xp::UserXpRepository,
    model::xp::{AwardOutcome, XpStanding},
};
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use test_utils::{builder::TestBuilder, factory};

const GUILD_ID: u64 = 111_111_111;
const USER_ID: u64 = 222_222_222;
const LEVEL_ROLE_ID: u64 = 333_333_333;

/// Role collaborator double that keeps member roles in memory and records every call.
///
/// Successful grants are applied to the in-memory member so later lookups see the role.
#[derive(Default)]
struct RecordingRoleGrant {
    members: Mutex<HashMap<(u64, u64), Vec<u64>>>,
    lookups: Mutex<usize>,
    grants: Mutex<Vec<(u64, u64, u64, String)>>,
    fail_lookup: bool,
    fail_grant: bool,
}

impl RecordingRoleGrant {
    fn with_member(self, guild_id: u64, user_id: u64, roles: Vec<u64>) -> Self {
        self.members
            .lock()
            .unwrap()
            .insert((guild_id, user_id), roles);
        self
    }

    fn failing_lookup(mut self) -> Self {
        self.fail_lookup = true;
        self
    }

    fn failing_grant(mut self) -> Self {
        self.fail_grant = true;
        self
    }

    fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }

    fn grants(&self) -> Vec<(u64, u64, u64, String)> {
        self.grants.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoleGrant for RecordingRoleGrant {
    async fn member_roles(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Vec<u64>>, AppError> {
        *self.lookups.lock().unwrap() += 1;

        if self.fail_lookup {
            return Err(serenity::Error::Other("member lookup unavailable").into());
        }

        Ok(self
            .members
            .lock()
            .unwrap()
            .get(&(guild_id, user_id))
            .cloned())
    }

    async fn add_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        if self.fail_grant {
            return Err(serenity::Error::Other("missing permissions").into());
        }

        self.grants
            .lock()
            .unwrap()
            .push((guild_id, user_id, role_id, reason.to_string()));

        if let Some(roles) = self.members.lock().unwrap().get_mut(&(guild_id, user_id)) {
            roles.push(role_id);
        }

        Ok(())
    }
}

/// XP options granting `LEVEL_ROLE_ID` from `target` onwards.
fn role_config(target: u32) -> XpConfig {
    XpConfig {
        level_target_for_role: target,
        role_id_to_grant: Some(LEVEL_ROLE_ID),
        ..XpConfig::default()
    }
}
