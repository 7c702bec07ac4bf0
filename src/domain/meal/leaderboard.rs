use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::entity::Difficulty;
use crate::domain::DomainError;

/// Column the leaderboard is ordered by (descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl LeaderboardSort {
    /// SQL column name for ORDER BY
    pub fn column(&self) -> &'static str {
        match self {
            LeaderboardSort::Wins => "wins",
            LeaderboardSort::WinPct => "win_pct",
        }
    }
}

impl std::fmt::Display for LeaderboardSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl FromStr for LeaderboardSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            other => Err(DomainError::InvalidSortKey(other.to_string())),
        }
    }
}

/// One ranked meal. Only active meals with at least one battle appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,

    /// Percentage, one decimal place
    pub win_pct: f64,
}

/// Converts a stored wins/battles ratio into a percentage rounded to one decimal
pub fn win_percentage(ratio: f64) -> f64 {
    (ratio * 1000.0).round() / 10.0
}
