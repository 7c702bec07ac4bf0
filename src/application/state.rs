// src/application/state.rs
//
// Wiring: pool -> schema -> repositories -> services.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::repositories::{
    MealRepository, SqliteMealRepository, SqliteUserRepository, SqliteWatchlistRepository,
    UserRepository, WatchlistRepository,
};
use crate::services::{KitchenService, WatchlistService};

/// Application state shared by whatever routing layer sits on top.
/// All fields are Arc-wrapped for thread-safe sharing.
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub event_bus: Arc<EventBus>,
    pub user_repo: Arc<dyn UserRepository>,
    pub kitchen_service: Arc<KitchenService>,
    pub watchlist_service: Arc<WatchlistService>,
}

impl AppState {
    /// Opens the database, initializes the schema and builds every service
    pub fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());
        let pool = Arc::new(create_connection_pool(config)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        // 2. REPOSITORIES
        let meal_repo: Arc<dyn MealRepository> = Arc::new(SqliteMealRepository::new(pool.clone()));
        let watchlist_repo: Arc<dyn WatchlistRepository> =
            Arc::new(SqliteWatchlistRepository::new(pool.clone()));
        let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));

        // 3. SERVICES
        let kitchen_service = Arc::new(
            KitchenService::new(meal_repo, event_bus.clone())
                .with_meal_table_script(config.meal_table_script.clone()),
        );
        let watchlist_service = Arc::new(WatchlistService::new(
            watchlist_repo,
            user_repo.clone(),
            event_bus.clone(),
        ));

        log::info!("meal_max ready ({})", config.database_path.display());

        Ok(Self {
            pool,
            event_bus,
            user_repo,
            kitchen_service,
            watchlist_service,
        })
    }
}
