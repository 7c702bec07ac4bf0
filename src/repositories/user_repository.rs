// src/repositories/user_repository.rs

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::domain::{validate_username, User};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// `None` when no user has this username
    fn find_id_by_username(&self, username: &str) -> AppResult<Option<i64>>;

    /// A blank username fails with `InvalidInput`, a taken one with `Duplicate`
    fn create_user(&self, username: &str) -> AppResult<User>;
}

pub struct SqliteUserRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn find_id_by_username(&self, username: &str) -> AppResult<Option<i64>> {
        let conn = self.pool.get()?;

        let id = conn
            .query_row(
                "SELECT id FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()?;

        Ok(id)
    }

    fn create_user(&self, username: &str) -> AppResult<User> {
        validate_username(username)?;
        let conn = self.pool.get()?;

        match conn.execute("INSERT INTO users (username) VALUES (?1)", params![username]) {
            Ok(_) => Ok(User {
                id: conn.last_insert_rowid(),
                username: username.to_string(),
            }),
            Err(e) if AppError::is_unique_violation(&e) => Err(AppError::Duplicate(format!(
                "User '{}' already exists.",
                username
            ))),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}
