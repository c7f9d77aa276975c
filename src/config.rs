//! Environment-based configuration.
//!
//! `Config::from_env` is called once at startup after `dotenvy` has loaded `.env`. Any
//! missing or malformed value is a `ConfigError` and stops the bot before it connects.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_XP_MIN: i64 = 15;
const DEFAULT_XP_MAX: i64 = 25;
const DEFAULT_COOLDOWN_SECONDS: u64 = 60;
const DEFAULT_LEVEL_TARGET: u32 = 20;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub xp: XpConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            xp: XpConfig::from_lookup(|name| std::env::var(name).ok())?,
        })
    }
}

/// Options for the message XP system.
///
/// `min`/`max` are kept exactly as configured; the XP roll normalizes them so a
/// misconfigured range (max below min, negative min) still yields a sane amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpConfig {
    /// When false no message ever reaches the award engine.
    pub enabled: bool,
    /// Configured lower bound of the per-message XP roll.
    pub min: i64,
    /// Configured upper bound of the per-message XP roll.
    pub max: i64,
    /// Minimum time between two awards for the same member in the same guild.
    pub cooldown_seconds: u64,
    /// Level from which `role_id_to_grant` is handed out.
    pub level_target_for_role: u32,
    /// Role granted once a member reaches `level_target_for_role`.
    pub role_id_to_grant: Option<u64>,
    /// When non-empty, only these channels earn XP.
    pub channel_whitelist: Vec<u64>,
    /// Channels that never earn XP.
    pub channel_blacklist: Vec<u64>,
}

impl Default for XpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min: DEFAULT_XP_MIN,
            max: DEFAULT_XP_MAX,
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            level_target_for_role: DEFAULT_LEVEL_TARGET,
            role_id_to_grant: None,
            channel_whitelist: Vec::new(),
            channel_blacklist: Vec::new(),
        }
    }
}

impl XpConfig {
    /// Builds the XP options from a variable lookup.
    ///
    /// Every option is optional; unset or blank variables fall back to the defaults, except
    /// `XP_ENABLED` which only enables XP when set to exactly `true`.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of an environment variable, if set
    ///
    /// # Returns
    /// - `Ok(XpConfig)` - Parsed options
    /// - `Err(ConfigError::InvalidEnvVar)` - A value could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Exact match: "TRUE" or an empty value turn XP off
        let enabled = match lookup("XP_ENABLED") {
            Some(value) => value == "true",
            None => defaults.enabled,
        };

        Ok(Self {
            enabled,
            min: parse_or(&lookup, "XP_MIN", defaults.min)?,
            max: parse_or(&lookup, "XP_MAX", defaults.max)?,
            cooldown_seconds: parse_or(&lookup, "XP_COOLDOWN_SECONDS", defaults.cooldown_seconds)?,
            level_target_for_role: parse_or(
                &lookup,
                "LEVEL_TARGET",
                defaults.level_target_for_role,
            )?,
            role_id_to_grant: parse_role_id(&lookup, "LEVEL_ROLE_ID")?,
            channel_whitelist: parse_id_list(&lookup, "XP_CHANNEL_WHITELIST")?,
            channel_blacklist: parse_id_list(&lookup, "XP_CHANNEL_BLACKLIST")?,
        })
    }
}

fn non_blank<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn invalid(name: &str, value: &str, reason: impl Display) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match non_blank(lookup, name) {
        Some(value) => value.parse::<T>().map_err(|e| invalid(name, &value, e)),
        None => Ok(default),
    }
}

fn parse_role_id<F>(lookup: &F, name: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = non_blank(lookup, name) else {
        return Ok(None);
    };

    match value.parse::<u64>() {
        Ok(0) => Err(invalid(name, &value, "role id must be non-zero")),
        Ok(id) => Ok(Some(id)),
        Err(e) => Err(invalid(name, &value, e)),
    }
}

fn parse_id_list<F>(lookup: &F, name: &str) -> Result<Vec<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = non_blank(lookup, name) else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| id.parse::<u64>().map_err(|e| invalid(name, id, e)))
        .collect()
}
