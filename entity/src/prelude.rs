pub use super::user_xp::Entity as UserXp;
