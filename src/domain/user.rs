// User reference
//
// Users are owned elsewhere; the core only needs to resolve a username
// to its id.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Username cannot be empty
pub fn validate_username(username: &str) -> DomainResult<()> {
    if username.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Username cannot be empty".to_string(),
        ));
    }
    Ok(())
}
