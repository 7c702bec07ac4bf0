use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A movie on a user's watchlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// Surrogate key assigned by the store
    pub id: i64,

    /// Owning user (REQUIRED)
    pub user_id: i64,

    pub movie_title: String,

    /// Reference into an external movie catalog
    pub movie_id: Option<i64>,

    pub overview: Option<String>,

    pub popularity: Option<f64>,

    /// Set once, at creation
    pub added_on: DateTime<Utc>,

    pub watched: bool,
}

/// Movie attributes supplied when adding to a watchlist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub movie_title: String,
    pub movie_id: Option<i64>,
    pub overview: Option<String>,
    pub popularity: Option<f64>,
}

impl MovieDetails {
    pub fn titled(movie_title: impl Into<String>) -> Self {
        Self {
            movie_title: movie_title.into(),
            ..Self::default()
        }
    }
}

/// A watchlist row not yet persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewWatchlistEntry {
    pub user_id: i64,
    pub details: MovieDetails,
    pub added_on: DateTime<Utc>,
}

impl NewWatchlistEntry {
    /// `watched` always starts false; `added_on` is now
    pub fn new(user_id: i64, details: MovieDetails) -> Self {
        Self {
            user_id,
            details,
            added_on: Utc::now(),
        }
    }
}

/// Listing view of an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub id: i64,
    pub movie_title: String,
    pub added_on: DateTime<Utc>,
    pub watched: bool,
}

impl From<WatchlistEntry> for WatchlistItem {
    fn from(entry: WatchlistEntry) -> Self {
        Self {
            id: entry.id,
            movie_title: entry.movie_title,
            added_on: entry.added_on,
            watched: entry.watched,
        }
    }
}

/// Returned after a successful removal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalReceipt {
    pub message: String,
    pub movie_title: String,
}

impl RemovalReceipt {
    pub fn new(movie_title: String) -> Self {
        Self {
            message: "Movie removed from watchlist".to_string(),
            movie_title,
        }
    }
}
