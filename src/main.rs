// src/main.rs
//
// Opens (or creates) the database and logs the current leaderboard.

use meal_max::{AppConfig, AppState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let state = AppState::bootstrap(&config)?;

    let leaderboard = state.kitchen_service.get_leaderboard(None)?;
    log::info!("Leaderboard: {}", serde_json::to_string_pretty(&leaderboard)?);

    Ok(())
}
