use crate::{data::user_xp::UserXpRepository, error::AppError, model::xp::UpsertUserXpParam};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find;
mod get_standing;
mod upsert;
