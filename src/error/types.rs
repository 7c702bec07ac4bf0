use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyDeleted(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    InvalidInput(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True when the error is a SQLite UNIQUE constraint failure
    pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_messages_are_verbatim() {
        let err = AppError::NotFound("Meal with ID 999 not found".to_string());
        assert_eq!(err.to_string(), "Meal with ID 999 not found");

        let err: AppError = DomainError::InvalidSortKey("invalid".to_string()).into();
        assert_eq!(err.to_string(), "Invalid sort_by parameter: invalid");
    }

    #[test]
    fn test_serializes_as_message() {
        let err = AppError::Duplicate("Meal with name 'Lasagna' already exists".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Meal with name 'Lasagna' already exists\"");
    }
}
