// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are dumb data mappers
// - No business logic, no event emission, no cross-repository calls
// - Explicit SQL only
// - Store-level UNIQUE violations become `AppError::Duplicate` here

pub mod meal_repository;
pub mod user_repository;
pub mod watchlist_repository;

pub use meal_repository::{MealRepository, SqliteMealRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};
pub use watchlist_repository::{SqliteWatchlistRepository, WatchlistRepository};

#[cfg(test)]
pub use meal_repository::MockMealRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use watchlist_repository::MockWatchlistRepository;
