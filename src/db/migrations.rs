// src/db/migrations.rs
//
// Database schema initialization
//
// Safe to call on every startup: a fresh database gets the full schema,
// a current one is left alone, anything else is refused.

use rusqlite::Connection;

use crate::error::{AppError, AppResult};

/// Current schema version
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Users and watchlist tables
const BASE_SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Drops and recreates the meals table
pub const MEAL_TABLE_SCRIPT: &str = include_str!("../../sql/create_meal_table.sql");

/// Initialize the database schema
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
        log::info!("Initialized database schema at version {}", CURRENT_SCHEMA_VERSION);
    } else if current_version < CURRENT_SCHEMA_VERSION {
        return Err(AppError::Config(format!(
            "Schema version {} is outdated. Expected {}. Manual migration required.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(AppError::Config(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Returns 0 if the schema_version table doesn't exist (fresh database)
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(BASE_SCHEMA)?;
    reset_meals_table(conn, MEAL_TABLE_SCRIPT)
}

/// Run a meals reset script as one batch
pub fn reset_meals_table(conn: &Connection, script: &str) -> AppResult<()> {
    conn.execute_batch(script)?;
    log::debug!("Meals table recreated");
    Ok(())
}

/// Runs SQLite's integrity check
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result != "ok" {
        return Err(AppError::Config(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

/// Size and row counts, for maintenance output
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    let count = |table: &str| -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        Ok(conn.query_row(&sql, [], |row| row.get(0))?)
    };

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        user_count: count("users")?,
        meal_count: count("meals")?,
        deleted_meal_count: conn.query_row(
            "SELECT COUNT(*) FROM meals WHERE deleted = TRUE",
            [],
            |row| row.get(0),
        )?,
        watchlist_count: count("watchlist")?,
    })
}

#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub user_count: i64,
    pub meal_count: i64,
    pub deleted_meal_count: i64,
    pub watchlist_count: i64,
}
