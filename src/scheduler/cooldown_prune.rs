use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, state::BotState};

/// Starts the cooldown prune scheduler
///
/// Runs every minute and drops cooldown entries whose window has elapsed, keeping the
/// tracker bounded by the number of members who earned XP within the last window.
///
/// # Arguments
/// - `state`: Shared bot state holding the cooldown tracker and XP options
pub async fn start_scheduler(state: BotState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            let removed = state
                .cooldowns
                .prune(Utc::now(), state.xp.cooldown_seconds)
                .await;

            if removed > 0 {
                tracing::debug!(
                    "Pruned {} expired cooldown entries ({} still tracked)",
                    removed,
                    state.cooldowns.len().await
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cooldown prune scheduler started");

    Ok(())
}
