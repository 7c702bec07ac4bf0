// src/events/mod.rs
//
// Internal event system: the bus and the domain events services emit.

pub mod bus;
pub mod types;

pub use types::{
    DomainEvent,
    // Meals
    MealCreated,
    MealDeleted,
    MealStatsUpdated,
    MealsCleared,
    // Watchlist
    WatchlistEntryAdded,
    WatchlistEntryRemoved,
    WatchlistEntryWatched,
};

pub use bus::{EventBus, EventLogEntry};
