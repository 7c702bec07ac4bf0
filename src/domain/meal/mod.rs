pub mod entity;
pub mod invariants;
pub mod leaderboard;

pub use entity::{BattleOutcome, Difficulty, Meal, MealRow};
pub use invariants::{validate_meal_name, Price};
pub use leaderboard::{win_percentage, LeaderboardEntry, LeaderboardSort};
