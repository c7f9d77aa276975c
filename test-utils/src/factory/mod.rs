//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults (fresh guild and user ids, zero XP)
//!     let record = factory::create_user_xp(&db).await?;
//!
//!     // Seed a member at a specific standing
//!     let record = factory::user_xp::UserXpFactory::new(&db)
//!         .guild_id(1)
//!         .user_id(2)
//!         .xp(275)
//!         .level(2)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user_xp` - Create XP ledger rows
//! - `helpers` - Unique id generation shared across factories

pub mod helpers;
pub mod user_xp;

pub use user_xp::create_user_xp;
