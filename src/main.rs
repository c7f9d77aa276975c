mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError, scheduler::cooldown_prune, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = BotState::new(db, config.xp.clone());

    if !state.xp.enabled {
        tracing::info!("XP system is disabled; messages will not earn XP");
    }

    // Start cooldown prune scheduler
    let scheduler_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = cooldown_prune::start_scheduler(scheduler_state).await {
            tracing::error!("Cooldown prune scheduler error: {}", e);
        }
    });

    tracing::info!("Starting level bot");

    let bot_client = bot::start::init_bot(&config, state).await?;

    // Runs until the gateway connection is closed
    bot::start::start_bot(bot_client).await
}
