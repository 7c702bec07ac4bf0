// src/config.rs
//
// Runtime configuration, read from the environment.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Database file location override
pub const DB_PATH_ENV: &str = "MEAL_MAX_DB_PATH";

/// Optional script used by `clear_meals` instead of the embedded one
pub const MEAL_TABLE_SCRIPT_ENV: &str = "SQL_CREATE_TABLE_PATH";

/// Maximum pooled connections
pub const POOL_SIZE_ENV: &str = "MEAL_MAX_POOL_SIZE";

const DEFAULT_POOL_SIZE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub meal_table_script: Option<PathBuf>,
    pub pool_size: u32,
}

impl AppConfig {
    /// Config for an explicit database file with defaults elsewhere
    pub fn for_path(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            meal_table_script: None,
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup (the process env in production)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(DB_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let meal_table_script = lookup(MEAL_TABLE_SCRIPT_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let pool_size = match lookup(POOL_SIZE_ENV) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(AppError::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        POOL_SIZE_ENV, raw
                    )))
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            database_path,
            meal_table_script,
            pool_size,
        })
    }
}

/// Default database location: {APP_DATA}/meal_max/meal_max.db
///
/// The directory is created if missing.
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;

    let meal_max_dir = app_data_dir.join("meal_max");
    std::fs::create_dir_all(&meal_max_dir)?;

    Ok(meal_max_dir.join("meal_max.db"))
}
