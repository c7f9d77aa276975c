//! Discord bot integration.
//!
//! The bot listens to guild messages and feeds eligible ones into the XP award engine.
//! It is initialized during startup and runs until the gateway connection closes.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` - Receive message events in guilds
//! - `GUILD_MEMBERS` - Member lookups for level role grants (privileged intent)
//! - `MESSAGE_CONTENT` - Read message content to skip very short messages (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod handler;
pub mod start;
