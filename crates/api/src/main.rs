//! Diwan - office-management backend for the irrigation authority
//!
//! Boots the application context, prepares the folder store and logs the
//! current top performers.

use std::time::Instant;

use diwan_domain::{Config, RankTier};
use diwan_infra::config;
use diwan_lib::utils::{init_tracing, log_operation};
use diwan_lib::AppContext;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let loaded = config::load();
    let config = loaded.as_ref().map_or_else(|_| Config::default(), Clone::clone);

    init_tracing(&config.logging)?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => info!(reason = %e, "no .env file loaded"),
    }
    if let Err(e) = &loaded {
        warn!(error = %e, "no configuration found, using defaults");
    }

    let ctx = AppContext::new(config)?;

    let started = Instant::now();
    let folders = ctx.folders.initialize_system_folders();
    log_operation("folders::initialize_system_folders", started.elapsed(), &folders);
    folders?;

    let started = Instant::now();
    let leaderboard = ctx.performance.leaderboard().await;
    log_operation("ranking::leaderboard", started.elapsed(), &leaderboard);

    let board = leaderboard?;
    for performer in &board.performers {
        info!(
            rank = performer.rank,
            tier = %RankTier::for_rank(performer.rank),
            name = %performer.name,
            department = %performer.department,
            points = performer.points,
            completed_tasks = performer.completed_tasks,
            "top performer"
        );
    }
    info!(
        ranked = board.performers.len(),
        average_points = board.summary.average_points,
        average_completed_tasks = board.summary.average_completed_tasks,
        average_time_days = board.summary.average_time,
        "leaderboard summary"
    );

    Ok(())
}
