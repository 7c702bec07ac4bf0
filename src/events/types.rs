// src/events/types.rs
//
// Domain events. Each one is an immutable fact that has already happened
// and carries only what a subscriber needs to react.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::BattleOutcome;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    fn event_id(&self) -> Uuid;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($ty)
            }
        }
    };
}

// ============================================================================
// MEAL EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub meal_id: i64,
    pub meal: String,
}

impl MealCreated {
    pub fn new(meal_id: i64, meal: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            meal_id,
            meal,
        }
    }
}

impl_domain_event!(MealCreated);

/// Emitted when a meal is soft-deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub meal_id: i64,
}

impl MealDeleted {
    pub fn new(meal_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            meal_id,
        }
    }
}

impl_domain_event!(MealDeleted);

/// Emitted after a battle result is recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealStatsUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub meal_id: i64,
    pub outcome: BattleOutcome,
}

impl MealStatsUpdated {
    pub fn new(meal_id: i64, outcome: BattleOutcome) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            meal_id,
            outcome,
        }
    }
}

impl_domain_event!(MealStatsUpdated);

/// Emitted after the meals table is reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealsCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl MealsCleared {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for MealsCleared {
    fn default() -> Self {
        Self::new()
    }
}

impl_domain_event!(MealsCleared);

// ============================================================================
// WATCHLIST EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntryAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: i64,
    pub user_id: i64,
    pub movie_title: String,
}

impl WatchlistEntryAdded {
    pub fn new(entry_id: i64, user_id: i64, movie_title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
            user_id,
            movie_title,
        }
    }
}

impl_domain_event!(WatchlistEntryAdded);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntryRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: i64,
    pub movie_title: String,
}

impl WatchlistEntryRemoved {
    pub fn new(user_id: i64, movie_title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            movie_title,
        }
    }
}

impl_domain_event!(WatchlistEntryRemoved);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntryWatched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: i64,
    pub user_id: i64,
}

impl WatchlistEntryWatched {
    pub fn new(entry_id: i64, user_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
            user_id,
        }
    }
}

impl_domain_event!(WatchlistEntryWatched);
