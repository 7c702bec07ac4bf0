// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization and the meals reset script
// - Maintenance utilities

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_test_connection, get_connection, ConnectionPool, PooledConn,
};

pub use migrations::{
    get_database_stats, initialize_database, reset_meals_table, verify_database_integrity,
    DatabaseStats, MEAL_TABLE_SCRIPT,
};

#[cfg(test)]
pub(crate) mod test_support;
