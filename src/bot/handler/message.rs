//! Message event handler feeding the XP system.
//!
//! Every guild message from a human author with at least three characters of trimmed
//! content, in a channel allowed by the whitelist/blacklist, is offered to the cooldown
//! gate. Messages that pass earn a freshly rolled amount of XP.

use chrono::Utc;
use serenity::all::{Context, Message};

use crate::{
    config::XpConfig,
    service::{
        role_grant::DiscordRoleGrant,
        xp::{random_xp, XpService},
    },
    state::BotState,
};

/// Minimum trimmed message length, in characters, that earns XP.
const MIN_CONTENT_CHARS: usize = 3;

/// Handle message creation in a channel
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if !state.xp.enabled {
        return;
    }

    // Only guild channels earn XP (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };

    if !is_eligible(
        &state.xp,
        message.author.bot,
        message.channel_id.get(),
        &message.content,
    ) {
        return;
    }

    let guild_id = guild_id.get();
    let user_id = message.author.id.get();

    if !state
        .cooldowns
        .try_acquire(guild_id, user_id, Utc::now(), state.xp.cooldown_seconds)
        .await
    {
        return;
    }

    let amount = random_xp(&state.xp);
    let roles = DiscordRoleGrant::new(ctx.http.clone());
    let service = XpService::new(&state.db, &roles, &state.xp);

    match service.award(guild_id, user_id, amount).await {
        Ok(outcome) if outcome.leveled_up => {
            tracing::debug!(
                "User {} leveled up to {} in guild {} ({}/{} into next level)",
                user_id,
                outcome.level,
                guild_id,
                outcome.into_level_xp,
                outcome.to_next
            );
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!(
                "Failed to award {} XP to user {} in guild {}: {}",
                amount,
                user_id,
                guild_id,
                e
            );
        }
    }
}

/// Checks whether a guild message qualifies for XP before the cooldown gate.
///
/// # Arguments
/// - `config` - XP options holding the channel filters
/// - `author_is_bot` - Whether the author is a bot or webhook
/// - `channel_id` - Channel the message was posted in
/// - `content` - Raw message content
///
/// # Returns
/// - `true` - Human author, long enough content, and an allowed channel
/// - `false` - Otherwise
pub fn is_eligible(config: &XpConfig, author_is_bot: bool, channel_id: u64, content: &str) -> bool {
    if author_is_bot {
        return false;
    }

    if content.trim().chars().count() < MIN_CONTENT_CHARS {
        return false;
    }

    if !config.channel_whitelist.is_empty() && !config.channel_whitelist.contains(&channel_id) {
        return false;
    }

    !config.channel_blacklist.contains(&channel_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests an ordinary message with default options.
    ///
    /// Expected: eligible
    #[test]
    fn accepts_regular_message() {
        assert!(is_eligible(&XpConfig::default(), false, 1, "hello there"));
    }

    /// Tests that bot authors never earn XP.
    ///
    /// Expected: not eligible
    #[test]
    fn rejects_bot_author() {
        assert!(!is_eligible(&XpConfig::default(), true, 1, "hello there"));
    }

    /// Tests the minimum length after trimming whitespace.
    ///
    /// Expected: two characters rejected, three accepted, padding ignored
    #[test]
    fn enforces_trimmed_minimum_length() {
        let config = XpConfig::default();

        assert!(!is_eligible(&config, false, 1, ""));
        assert!(!is_eligible(&config, false, 1, "ok"));
        assert!(!is_eligible(&config, false, 1, "   ok   \n"));
        assert!(is_eligible(&config, false, 1, "yes"));
        assert!(is_eligible(&config, false, 1, "  yes  "));
    }

    /// Tests that length counts characters rather than bytes.
    ///
    /// Expected: a two character message of multi-byte characters is rejected
    #[test]
    fn counts_characters_not_bytes() {
        let config = XpConfig::default();

        assert!(!is_eligible(&config, false, 1, "éé"));
        assert!(is_eligible(&config, false, 1, "été"));
    }

    /// Tests the channel whitelist.
    ///
    /// Expected: only listed channels are eligible
    #[test]
    fn honours_whitelist() {
        let config = XpConfig {
            channel_whitelist: vec![10, 20],
            ..XpConfig::default()
        };

        assert!(is_eligible(&config, false, 10, "hello"));
        assert!(!is_eligible(&config, false, 30, "hello"));
    }

    /// Tests the channel blacklist, including a channel that is also whitelisted.
    ///
    /// Expected: blacklisted channels are never eligible
    #[test]
    fn honours_blacklist() {
        let config = XpConfig {
            channel_whitelist: vec![10],
            channel_blacklist: vec![10, 20],
            ..XpConfig::default()
        };

        assert!(!is_eligible(&config, false, 10, "hello"));
        assert!(!is_eligible(&config, false, 20, "hello"));

        let config = XpConfig {
            channel_blacklist: vec![20],
            ..XpConfig::default()
        };
        assert!(is_eligible(&config, false, 10, "hello"));
    }
}
