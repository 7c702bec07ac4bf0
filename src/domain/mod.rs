// src/domain/mod.rs
//
// Domain root. All other modules import from `crate::domain::*`.

pub mod meal;
pub mod user;
pub mod watchlist;

// Meal Domain
pub use meal::{
    validate_meal_name, win_percentage, BattleOutcome, Difficulty, LeaderboardEntry,
    LeaderboardSort, Meal, MealRow, Price,
};

// Watchlist Domain
pub use watchlist::{
    validate_movie_details, MovieDetails, NewWatchlistEntry, RemovalReceipt, WatchlistEntry,
    WatchlistItem,
};

// Users
pub use user::{validate_username, User};

use thiserror::Error;

/// Domain-level errors
/// These are rejected inputs, raised before any state is touched
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(String),

    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    InvalidResult(String),

    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortKey(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
