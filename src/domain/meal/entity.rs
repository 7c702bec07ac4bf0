use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// A catalog meal as returned by lookups.
/// Battle counters and the deleted flag are not part of this view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Surrogate key assigned by the store
    pub id: i64,

    /// Unique meal name
    pub meal: String,

    pub cuisine: String,

    /// Always positive (see `Price`)
    pub price: f64,

    pub difficulty: Difficulty,
}

/// A meal row together with its soft-delete marker
#[derive(Debug, Clone, PartialEq)]
pub struct MealRow {
    pub meal: Meal,
    pub deleted: bool,
}

/// Preparation difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case-sensitive: "low" is rejected.
impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Difficulty::Low),
            "MED" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            other => Err(DomainError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Outcome of a single battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleOutcome {
    Win,
    Loss,
}

impl std::fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleOutcome::Win => write!(f, "win"),
            BattleOutcome::Loss => write!(f, "loss"),
        }
    }
}

impl FromStr for BattleOutcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(BattleOutcome::Win),
            "loss" => Ok(BattleOutcome::Loss),
            other => Err(DomainError::InvalidResult(other.to_string())),
        }
    }
}
