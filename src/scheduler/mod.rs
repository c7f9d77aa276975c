//! Cron jobs run alongside the bot.

pub mod cooldown_prune;
