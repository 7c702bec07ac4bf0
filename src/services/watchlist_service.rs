// src/services/watchlist_service.rs
//
// Per-user movie watchlists. Every operation first resolves the username.

use std::sync::Arc;

use crate::domain::validate_username;
use crate::domain::watchlist::{
    validate_movie_details, MovieDetails, NewWatchlistEntry, RemovalReceipt, WatchlistEntry,
    WatchlistItem,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, WatchlistEntryAdded, WatchlistEntryRemoved, WatchlistEntryWatched};
use crate::repositories::{UserRepository, WatchlistRepository};

pub struct WatchlistService {
    watchlist_repo: Arc<dyn WatchlistRepository>,
    user_repo: Arc<dyn UserRepository>,
    event_bus: Arc<EventBus>,
}

impl WatchlistService {
    pub fn new(
        watchlist_repo: Arc<dyn WatchlistRepository>,
        user_repo: Arc<dyn UserRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            watchlist_repo,
            user_repo,
            event_bus,
        }
    }

    fn resolve_user(&self, username: &str) -> AppResult<i64> {
        match self.user_repo.find_id_by_username(username)? {
            Some(id) => Ok(id),
            None => {
                log::error!("User '{}' not found.", username);
                Err(AppError::NotFound(format!("User '{}' not found.", username)))
            }
        }
    }

    fn find_entry(&self, user_id: i64, username: &str, movie_title: &str) -> AppResult<WatchlistEntry> {
        match self.watchlist_repo.find(user_id, movie_title)? {
            Some(entry) => Ok(entry),
            None => {
                log::error!("Movie '{}' not found in {}'s watchlist.", movie_title, username);
                Err(AppError::NotFound(format!(
                    "Movie '{}' not found in the watchlist.",
                    movie_title
                )))
            }
        }
    }

    /// Adds a movie by title only
    pub fn add_to_watchlist(&self, username: &str, movie_title: &str) -> AppResult<i64> {
        self.add_movie_to_watchlist(username, MovieDetails::titled(movie_title))
    }

    /// Adds a movie with its catalog attributes. Returns the entry id.
    pub fn add_movie_to_watchlist(&self, username: &str, details: MovieDetails) -> AppResult<i64> {
        validate_movie_details(&details)?;
        let user_id = self.resolve_user(username)?;

        if self.watchlist_repo.find(user_id, &details.movie_title)?.is_some() {
            log::error!(
                "Movie '{}' already exists in {}'s watchlist.",
                details.movie_title,
                username
            );
            return Err(AppError::Duplicate(format!(
                "Movie '{}' already exists in the watchlist.",
                details.movie_title
            )));
        }

        let movie_title = details.movie_title.clone();
        let entry_id = self
            .watchlist_repo
            .insert(&NewWatchlistEntry::new(user_id, details))?;

        log::info!("Movie '{}' added to {}'s watchlist.", movie_title, username);
        self.event_bus
            .emit(WatchlistEntryAdded::new(entry_id, user_id, movie_title));

        Ok(entry_id)
    }

    pub fn get_watchlist(&self, username: &str) -> AppResult<Vec<WatchlistItem>> {
        let user_id = self.resolve_user(username)?;

        let items: Vec<WatchlistItem> = self
            .watchlist_repo
            .list_by_user(user_id)?
            .into_iter()
            .map(WatchlistItem::from)
            .collect();

        log::info!("Retrieved watchlist for user '{}'.", username);
        Ok(items)
    }

    /// Permanently removes the entry
    pub fn remove_from_watchlist(&self, username: &str, movie_title: &str) -> AppResult<RemovalReceipt> {
        let user_id = self.resolve_user(username)?;
        let entry = self.find_entry(user_id, username, movie_title)?;

        self.watchlist_repo.delete(entry.id)?;

        log::info!("Movie '{}' removed from {}'s watchlist.", movie_title, username);
        self.event_bus
            .emit(WatchlistEntryRemoved::new(user_id, entry.movie_title.clone()));

        Ok(RemovalReceipt::new(entry.movie_title))
    }

    pub fn mark_watched(&self, username: &str, movie_title: &str) -> AppResult<()> {
        let user_id = self.resolve_user(username)?;
        let entry = self.find_entry(user_id, username, movie_title)?;

        if entry.watched {
            return Ok(());
        }
        self.watchlist_repo.mark_watched(entry.id)?;

        log::info!("Movie '{}' marked as watched for {}.", movie_title, username);
        self.event_bus
            .emit(WatchlistEntryWatched::new(entry.id, user_id));

        Ok(())
    }

    /// Lookup helper for callers that only have a username
    pub fn user_exists(&self, username: &str) -> AppResult<bool> {
        validate_username(username)?;
        Ok(self.user_repo.find_id_by_username(username)?.is_some())
    }
}
