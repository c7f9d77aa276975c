//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data layer boundary
//! so services never handle entity models directly.

pub mod xp;
