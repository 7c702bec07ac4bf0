// Shared fixtures for repository and service tests

use std::sync::Arc;

use tempfile::TempDir;

use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};

/// A pool over a fresh, initialized database file.
/// Keep the `TempDir` alive for as long as the pool is used.
pub(crate) fn test_pool() -> (TempDir, Arc<ConnectionPool>) {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::for_path(dir.path().join("meal_max.db"));
    config.pool_size = 2;

    let pool = create_connection_pool(&config).unwrap();
    initialize_database(&get_connection(&pool).unwrap()).unwrap();

    (dir, Arc::new(pool))
}
