//! Watchlist invariants:
//!
//! 1. Every entry belongs to exactly one user
//! 2. (user_id, movie_title) is unique
//! 3. Movie title cannot be empty
//! 4. Removal is permanent

pub mod entity;

pub use entity::{MovieDetails, NewWatchlistEntry, RemovalReceipt, WatchlistEntry, WatchlistItem};

use crate::domain::{DomainError, DomainResult};

/// Validates the movie attributes of a new entry
pub fn validate_movie_details(details: &MovieDetails) -> DomainResult<()> {
    if details.movie_title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    if let Some(popularity) = details.popularity {
        if !popularity.is_finite() {
            return Err(DomainError::InvariantViolation(format!(
                "Movie popularity must be a finite number, got {}",
                popularity
            )));
        }
    }
    Ok(())
}
