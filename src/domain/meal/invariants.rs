use std::str::FromStr;

use crate::domain::{DomainError, DomainResult};

/// A validated meal price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Rejects zero, negative and non-finite values
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidPrice(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Parses raw price text, echoing the original input on failure
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidPrice(s.to_string()))?;
        Price::new(value).map_err(|_| DomainError::InvalidPrice(s.to_string()))
    }
}

/// Meal name cannot be empty
pub fn validate_meal_name(meal: &str) -> DomainResult<()> {
    if meal.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Meal name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Meal invariants:
///
/// 1. Name is unique (enforced by the store) and non-empty
/// 2. Price is a positive number
/// 3. Difficulty is one of LOW, MED, HIGH
/// 4. wins <= battles
/// 5. A deleted meal stays deleted
