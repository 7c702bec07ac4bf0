// src/services/kitchen_service.rs
//
// Meal catalog operations: validation, soft delete, battle stats and the
// leaderboard.

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use crate::db::MEAL_TABLE_SCRIPT;
use crate::domain::meal::{
    validate_meal_name, BattleOutcome, Difficulty, LeaderboardEntry, LeaderboardSort, Meal, Price,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, MealCreated, MealDeleted, MealStatsUpdated, MealsCleared};
use crate::repositories::MealRepository;

#[derive(Debug, Clone)]
pub struct CreateMealRequest {
    pub meal: String,
    pub cuisine: String,
    /// Raw price text; must parse to a positive number
    pub price: String,
    /// One of LOW, MED, HIGH (case-sensitive)
    pub difficulty: String,
}

pub struct KitchenService {
    meal_repo: Arc<dyn MealRepository>,
    event_bus: Arc<EventBus>,
    meal_table_script: Option<PathBuf>,
}

/// Logs a rejected operation and hands the error back
fn reject<T>(err: impl Into<AppError>) -> AppResult<T> {
    let err = err.into();
    log::error!("{}", err);
    Err(err)
}

impl KitchenService {
    pub fn new(meal_repo: Arc<dyn MealRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            meal_repo,
            event_bus,
            meal_table_script: None,
        }
    }

    /// Use a script file for `clear_meals` instead of the embedded one
    pub fn with_meal_table_script(mut self, script: Option<PathBuf>) -> Self {
        self.meal_table_script = script;
        self
    }

    pub fn create_meal(&self, request: CreateMealRequest) -> AppResult<i64> {
        let price = match request.price.parse::<Price>() {
            Ok(price) => price,
            Err(e) => return reject(e),
        };
        let difficulty = match request.difficulty.parse::<Difficulty>() {
            Ok(difficulty) => difficulty,
            Err(e) => return reject(e),
        };
        if let Err(e) = validate_meal_name(&request.meal) {
            return reject(e);
        }

        let meal_id = match self.meal_repo.insert(
            &request.meal,
            &request.cuisine,
            price.value(),
            difficulty,
        ) {
            Ok(id) => id,
            Err(e @ AppError::Duplicate(_)) => return reject(e),
            Err(e) => return Err(e),
        };

        log::info!("Meal successfully added to the database: {}", request.meal);
        self.event_bus.emit(MealCreated::new(meal_id, request.meal));

        Ok(meal_id)
    }

    /// Soft delete. A second delete of the same meal fails.
    pub fn delete_meal(&self, meal_id: i64) -> AppResult<()> {
        match self.meal_repo.deleted_flag(meal_id)? {
            None => return reject(AppError::NotFound(format!("Meal with ID {} not found", meal_id))),
            Some(true) => {
                return reject(AppError::AlreadyDeleted(format!(
                    "Meal with ID {} has been deleted",
                    meal_id
                )))
            }
            Some(false) => {}
        }

        self.meal_repo.mark_deleted(meal_id)?;

        log::info!("Meal with ID {} marked as deleted.", meal_id);
        self.event_bus.emit(MealDeleted::new(meal_id));

        Ok(())
    }

    pub fn get_meal_by_id(&self, meal_id: i64) -> AppResult<Meal> {
        match self.meal_repo.find_by_id(meal_id)? {
            None => reject(AppError::NotFound(format!("Meal with ID {} not found", meal_id))),
            Some(row) if row.deleted => reject(AppError::AlreadyDeleted(format!(
                "Meal with ID {} has been deleted",
                meal_id
            ))),
            Some(row) => {
                log::info!("Retrieved meal with ID {}", meal_id);
                Ok(row.meal)
            }
        }
    }

    pub fn get_meal_by_name(&self, meal_name: &str) -> AppResult<Meal> {
        match self.meal_repo.find_by_name(meal_name)? {
            None => reject(AppError::NotFound(format!(
                "Meal with name {} not found",
                meal_name
            ))),
            Some(row) if row.deleted => reject(AppError::AlreadyDeleted(format!(
                "Meal with name {} has been deleted",
                meal_name
            ))),
            Some(row) => {
                log::info!("Retrieved meal with name {}", meal_name);
                Ok(row.meal)
            }
        }
    }

    /// Records a battle result: "win" bumps battles and wins, "loss" only battles
    pub fn update_meal_stats(&self, meal_id: i64, result: &str) -> AppResult<()> {
        let outcome = match result.parse::<BattleOutcome>() {
            Ok(outcome) => outcome,
            Err(e) => return reject(e),
        };

        match self.meal_repo.deleted_flag(meal_id)? {
            None => return reject(AppError::NotFound(format!("Meal with ID {} not found", meal_id))),
            Some(true) => {
                return reject(AppError::AlreadyDeleted(format!(
                    "Meal with ID {} has been deleted",
                    meal_id
                )))
            }
            Some(false) => {}
        }

        self.meal_repo.record_battle(meal_id, outcome)?;

        log::info!("Updated stats for meal with ID {}: {}", meal_id, outcome);
        self.event_bus.emit(MealStatsUpdated::new(meal_id, outcome));

        Ok(())
    }

    /// Ranked active meals. `sort_by` defaults to "wins"; an unknown key
    /// fails before the store is touched.
    pub fn get_leaderboard(&self, sort_by: Option<&str>) -> AppResult<Vec<LeaderboardEntry>> {
        let sort = match sort_by {
            None => LeaderboardSort::default(),
            Some(raw) => match raw.parse::<LeaderboardSort>() {
                Ok(sort) => sort,
                Err(e) => return reject(e),
            },
        };

        let leaderboard = self.meal_repo.leaderboard(sort)?;

        log::info!(
            "Leaderboard retrieved successfully ({} meals, sorted by {})",
            leaderboard.len(),
            sort
        );
        Ok(leaderboard)
    }

    /// Destructive reset of the meals table
    pub fn clear_meals(&self) -> AppResult<()> {
        let script: Cow<'static, str> = match &self.meal_table_script {
            Some(path) => Cow::Owned(std::fs::read_to_string(path)?),
            None => Cow::Borrowed(MEAL_TABLE_SCRIPT),
        };

        self.meal_repo.reset(&script)?;

        log::info!("Meals cleared successfully.");
        self.event_bus.emit(MealsCleared::new());

        Ok(())
    }
}
