// src/repositories/watchlist_repository.rs
//
// Watchlist persistence. Unlike meals, entries are hard-deleted.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::ConnectionPool;
use crate::domain::watchlist::{NewWatchlistEntry, WatchlistEntry};
use crate::error::{AppError, AppResult};

const ENTRY_COLUMNS: &str =
    "id, user_id, movie_title, movie_id, overview, popularity, added_on, watched";

#[cfg_attr(test, mockall::automock)]
pub trait WatchlistRepository: Send + Sync {
    /// Returns the new id. An existing (user, title) pair fails with `Duplicate`.
    fn insert(&self, entry: &NewWatchlistEntry) -> AppResult<i64>;

    fn find(&self, user_id: i64, movie_title: &str) -> AppResult<Option<WatchlistEntry>>;

    /// In insertion order
    fn list_by_user(&self, user_id: i64) -> AppResult<Vec<WatchlistEntry>>;

    fn delete(&self, id: i64) -> AppResult<()>;

    fn mark_watched(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteWatchlistRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteWatchlistRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &Row) -> Result<WatchlistEntry, rusqlite::Error> {
        let added_on_str: String = row.get("added_on")?;
        let added_on = DateTime::parse_from_rfc3339(&added_on_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

        Ok(WatchlistEntry {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            movie_title: row.get("movie_title")?,
            movie_id: row.get("movie_id")?,
            overview: row.get("overview")?,
            popularity: row.get("popularity")?,
            added_on,
            watched: row.get("watched")?,
        })
    }
}

impl WatchlistRepository for SqliteWatchlistRepository {
    fn insert(&self, entry: &NewWatchlistEntry) -> AppResult<i64> {
        let conn = self.pool.get()?;
        let details = &entry.details;

        match conn.execute(
            "INSERT INTO watchlist (user_id, movie_title, movie_id, overview, popularity, added_on, watched)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, FALSE)",
            params![
                entry.user_id,
                details.movie_title,
                details.movie_id,
                details.overview,
                details.popularity,
                entry.added_on.to_rfc3339(),
            ],
        ) {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(e) if AppError::is_unique_violation(&e) => Err(AppError::Duplicate(format!(
                "Movie '{}' already exists in the watchlist.",
                details.movie_title
            ))),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find(&self, user_id: i64, movie_title: &str) -> AppResult<Option<WatchlistEntry>> {
        let conn = self.pool.get()?;

        let sql = format!(
            "SELECT {} FROM watchlist WHERE user_id = ?1 AND movie_title = ?2",
            ENTRY_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        Ok(stmt
            .query_row(params![user_id, movie_title], Self::row_to_entry)
            .optional()?)
    }

    fn list_by_user(&self, user_id: i64) -> AppResult<Vec<WatchlistEntry>> {
        let conn = self.pool.get()?;

        let sql = format!(
            "SELECT {} FROM watchlist WHERE user_id = ?1 ORDER BY id",
            ENTRY_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        let entries: Vec<WatchlistEntry> = stmt
            .query_map(params![user_id], Self::row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM watchlist WHERE id = ?1", params![id])?;
        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("Watchlist entry {} not found", id)));
        }

        Ok(())
    }

    fn mark_watched(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected =
            conn.execute("UPDATE watchlist SET watched = TRUE WHERE id = ?1", params![id])?;
        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("Watchlist entry {} not found", id)));
        }

        Ok(())
    }
}
