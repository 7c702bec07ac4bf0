// src/repositories/meal_repository.rs
//
// Meal persistence. Meals are never physically deleted; `mark_deleted`
// only flips the flag.

use std::sync::Arc;

use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::ConnectionPool;
use crate::domain::meal::{
    win_percentage, BattleOutcome, Difficulty, LeaderboardEntry, LeaderboardSort, Meal, MealRow,
};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait MealRepository: Send + Sync {
    /// Returns the new id. A taken name fails with `Duplicate`.
    fn insert(&self, meal: &str, cuisine: &str, price: f64, difficulty: Difficulty)
        -> AppResult<i64>;

    /// `None` when no row has this id
    fn deleted_flag(&self, id: i64) -> AppResult<Option<bool>>;

    fn mark_deleted(&self, id: i64) -> AppResult<()>;

    fn find_by_id(&self, id: i64) -> AppResult<Option<MealRow>>;

    fn find_by_name(&self, meal: &str) -> AppResult<Option<MealRow>>;

    fn record_battle(&self, id: i64, outcome: BattleOutcome) -> AppResult<()>;

    /// Active meals with at least one battle, best first
    fn leaderboard(&self, sort: LeaderboardSort) -> AppResult<Vec<LeaderboardEntry>>;

    /// Runs a drop-and-create script for the meals table
    fn reset(&self, script: &str) -> AppResult<()>;
}

pub struct SqliteMealRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMealRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn parse_difficulty(row: &Row, idx: usize) -> Result<Difficulty, rusqlite::Error> {
        let raw: String = row.get(idx)?;
        raw.parse::<Difficulty>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }

    /// Maps `id, meal, cuisine, price, difficulty, deleted`
    fn row_to_meal(row: &Row) -> Result<MealRow, rusqlite::Error> {
        Ok(MealRow {
            meal: Meal {
                id: row.get(0)?,
                meal: row.get(1)?,
                cuisine: row.get(2)?,
                price: row.get(3)?,
                difficulty: Self::parse_difficulty(row, 4)?,
            },
            deleted: row.get(5)?,
        })
    }

    /// Maps `id, meal, cuisine, price, difficulty, battles, wins, win_pct`
    fn row_to_leaderboard_entry(row: &Row) -> Result<LeaderboardEntry, rusqlite::Error> {
        let ratio: f64 = row.get(7)?;
        Ok(LeaderboardEntry {
            id: row.get(0)?,
            meal: row.get(1)?,
            cuisine: row.get(2)?,
            price: row.get(3)?,
            difficulty: Self::parse_difficulty(row, 4)?,
            battles: row.get(5)?,
            wins: row.get(6)?,
            win_pct: win_percentage(ratio),
        })
    }
}

impl MealRepository for SqliteMealRepository {
    fn insert(
        &self,
        meal: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> AppResult<i64> {
        let conn = self.pool.get()?;

        match conn.execute(
            "INSERT INTO meals (meal, cuisine, price, difficulty) VALUES (?1, ?2, ?3, ?4)",
            params![meal, cuisine, price, difficulty.as_str()],
        ) {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(e) if AppError::is_unique_violation(&e) => Err(AppError::Duplicate(format!(
                "Meal with name '{}' already exists",
                meal
            ))),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn deleted_flag(&self, id: i64) -> AppResult<Option<bool>> {
        let conn = self.pool.get()?;

        let deleted = conn
            .query_row("SELECT deleted FROM meals WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(deleted)
    }

    fn mark_deleted(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("UPDATE meals SET deleted = TRUE WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<MealRow>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, meal, cuisine, price, difficulty, deleted FROM meals WHERE id = ?1",
        )?;

        Ok(stmt.query_row(params![id], Self::row_to_meal).optional()?)
    }

    fn find_by_name(&self, meal: &str) -> AppResult<Option<MealRow>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, meal, cuisine, price, difficulty, deleted FROM meals WHERE meal = ?1",
        )?;

        Ok(stmt.query_row(params![meal], Self::row_to_meal).optional()?)
    }

    fn record_battle(&self, id: i64, outcome: BattleOutcome) -> AppResult<()> {
        let conn = self.pool.get()?;

        let sql = match outcome {
            BattleOutcome::Win => "UPDATE meals SET battles = battles + 1, wins = wins + 1 WHERE id = ?1",
            BattleOutcome::Loss => "UPDATE meals SET battles = battles + 1 WHERE id = ?1",
        };
        conn.execute(sql, params![id])?;

        Ok(())
    }

    fn leaderboard(&self, sort: LeaderboardSort) -> AppResult<Vec<LeaderboardEntry>> {
        let conn = self.pool.get()?;

        let sql = format!(
            "SELECT id, meal, cuisine, price, difficulty, battles, wins,
                    (wins * 1.0 / battles) AS win_pct
             FROM meals
             WHERE deleted = false AND battles > 0
             ORDER BY {} DESC, id ASC",
            sort.column()
        );
        let mut stmt = conn.prepare(&sql)?;

        let entries: Vec<LeaderboardEntry> = stmt
            .query_map([], Self::row_to_leaderboard_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn reset(&self, script: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        crate::db::reset_meals_table(&conn, script)
    }
}
