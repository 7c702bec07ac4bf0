// src/lib.rs
// meal_max - meal battle catalog and user watchlists
//
// Architecture:
// - Domain: value types and invariants, no I/O
// - Repositories: explicit SQL over a pooled SQLite connection
// - Services: validation, error mapping, logging and domain events
// - Application: wiring for an outer routing layer

pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    BattleOutcome, Difficulty, DomainError, LeaderboardEntry, LeaderboardSort, Meal,
    MovieDetails, Price, RemovalReceipt, User, WatchlistEntry, WatchlistItem,
};

// ============================================================================
// PUBLIC API - Errors, config, database
// ============================================================================

pub use config::AppConfig;
pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events, repositories, services
// ============================================================================

pub use events::{DomainEvent, EventBus, EventLogEntry};

pub use repositories::{
    MealRepository, SqliteMealRepository, SqliteUserRepository, SqliteWatchlistRepository,
    UserRepository, WatchlistRepository,
};

pub use services::{CreateMealRequest, KitchenService, WatchlistService};

pub use application::AppState;
