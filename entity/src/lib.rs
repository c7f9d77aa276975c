//! SeaORM entity definitions for the bot's database.

pub mod prelude;

pub mod user_xp;
