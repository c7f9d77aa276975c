//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! service layer independent of the database schema.

pub mod user_xp;

#[cfg(test)]
mod test;
