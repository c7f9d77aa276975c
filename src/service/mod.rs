//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot event handlers and the data (repository) layer:
//!
//! - **level_curve**: Pure XP-to-level arithmetic
//! - **cooldown**: Process-local gate limiting how often a member earns XP
//! - **xp**: Award engine coordinating the ledger, level curve and role grants
//! - **role_grant**: Discord role collaborator used on level-ups

pub mod cooldown;
pub mod level_curve;
pub mod role_grant;
pub mod xp;
