// End-to-end checks through AppState against a real SQLite file

use meal_max::{
    AppConfig, AppError, AppState, CreateMealRequest, Difficulty, MovieDetails, UserRepository,
};
use tempfile::TempDir;

fn bootstrap() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::for_path(dir.path().join("meal_max.db"));
    config.pool_size = 2;
    let state = AppState::bootstrap(&config).unwrap();
    (dir, state)
}

fn create(state: &AppState, meal: &str, cuisine: &str, price: &str, difficulty: &str) -> i64 {
    state
        .kitchen_service
        .create_meal(CreateMealRequest {
            meal: meal.to_string(),
            cuisine: cuisine.to_string(),
            price: price.to_string(),
            difficulty: difficulty.to_string(),
        })
        .unwrap()
}

fn battle(state: &AppState, id: i64, battles: u32, wins: u32) {
    for n in 0..battles {
        let result = if n < wins { "win" } else { "loss" };
        state.kitchen_service.update_meal_stats(id, result).unwrap();
    }
}

#[test]
fn create_then_lookup_returns_inputs() {
    let (_dir, state) = bootstrap();
    let id = create(&state, "Lasagna", "Italian", "12.99", "MED");

    let by_id = state.kitchen_service.get_meal_by_id(id).unwrap();
    assert_eq!(by_id.meal, "Lasagna");
    assert_eq!(by_id.cuisine, "Italian");
    assert_eq!(by_id.price, 12.99);
    assert_eq!(by_id.difficulty, Difficulty::Med);

    let by_name = state.kitchen_service.get_meal_by_name("Lasagna").unwrap();
    assert_eq!(by_name, by_id);
}

#[test]
fn duplicate_meal_name_is_rejected() {
    let (_dir, state) = bootstrap();
    create(&state, "Lasagna", "Italian", "12.99", "LOW");

    let err = state
        .kitchen_service
        .create_meal(CreateMealRequest {
            meal: "Lasagna".to_string(),
            cuisine: "Italian".to_string(),
            price: "12.99".to_string(),
            difficulty: "LOW".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, AppError::Duplicate(_)));
    assert_eq!(err.to_string(), "Meal with name 'Lasagna' already exists");
}

#[test]
fn non_numeric_price_is_rejected_before_insert() {
    let (_dir, state) = bootstrap();

    let err = state
        .kitchen_service
        .create_meal(CreateMealRequest {
            meal: "Lasagna".to_string(),
            cuisine: "Italian".to_string(),
            price: "invalid".to_string(),
            difficulty: "LOW".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(
        err.to_string(),
        "Invalid price: invalid. Price must be a positive number."
    );
    assert!(matches!(
        state.kitchen_service.get_meal_by_name("Lasagna"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn soft_delete_hides_meal_and_cannot_repeat() {
    let (_dir, state) = bootstrap();
    let id = create(&state, "Burger", "American", "9.99", "LOW");

    state.kitchen_service.delete_meal(id).unwrap();

    let err = state.kitchen_service.delete_meal(id).unwrap_err();
    assert!(matches!(err, AppError::AlreadyDeleted(_)));
    assert!(matches!(
        state.kitchen_service.get_meal_by_id(id),
        Err(AppError::AlreadyDeleted(_))
    ));
    assert!(matches!(
        state.kitchen_service.update_meal_stats(id, "win"),
        Err(AppError::AlreadyDeleted(_))
    ));
    assert!(matches!(
        state.kitchen_service.delete_meal(id + 100),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn leaderboard_orders_by_requested_column() {
    let (_dir, state) = bootstrap();
    let burger = create(&state, "Burger", "American", "9.99", "LOW");
    let sushi = create(&state, "Sushi", "Japanese", "15.99", "HIGH");
    let lasagna = create(&state, "Lasagna", "Italian", "12.99", "MED");
    create(&state, "Salad", "Greek", "7.5", "LOW");

    battle(&state, burger, 10, 7);
    battle(&state, sushi, 8, 6);
    battle(&state, lasagna, 5, 3);

    let by_wins = state.kitchen_service.get_leaderboard(None).unwrap();
    let order: Vec<&str> = by_wins.iter().map(|e| e.meal.as_str()).collect();
    assert_eq!(order, vec!["Burger", "Sushi", "Lasagna"]);

    let by_pct = state.kitchen_service.get_leaderboard(Some("win_pct")).unwrap();
    let ranked: Vec<(&str, f64)> = by_pct.iter().map(|e| (e.meal.as_str(), e.win_pct)).collect();
    assert_eq!(ranked, vec![("Sushi", 75.0), ("Burger", 70.0), ("Lasagna", 60.0)]);

    let json = serde_json::to_value(&by_pct[0]).unwrap();
    assert_eq!(json["meal"], "Sushi");
    assert_eq!(json["difficulty"], "HIGH");
    assert_eq!(json["battles"], 8);
    assert_eq!(json["wins"], 6);
    assert_eq!(json["win_pct"], 75.0);

    assert!(matches!(
        state.kitchen_service.get_leaderboard(Some("losses")),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn clear_meals_empties_catalog() {
    let (_dir, state) = bootstrap();
    let id = create(&state, "Burger", "American", "9.99", "LOW");

    state.kitchen_service.clear_meals().unwrap();

    assert!(matches!(
        state.kitchen_service.get_meal_by_id(id),
        Err(AppError::NotFound(_))
    ));
    assert!(state.kitchen_service.get_leaderboard(None).unwrap().is_empty());
}

#[test]
fn watchlist_lifecycle() {
    let (_dir, state) = bootstrap();
    state.user_repo.create_user("alice").unwrap();
    let watchlist = &state.watchlist_service;

    watchlist.add_to_watchlist("alice", "Heat").unwrap();
    watchlist
        .add_movie_to_watchlist(
            "alice",
            MovieDetails {
                movie_title: "Alien".to_string(),
                movie_id: Some(348),
                overview: Some("In space no one can hear you scream".to_string()),
                popularity: Some(61.2),
            },
        )
        .unwrap();

    let err = watchlist.add_to_watchlist("alice", "Heat").unwrap_err();
    assert!(matches!(err, AppError::Duplicate(_)));

    watchlist.mark_watched("alice", "Alien").unwrap();

    let items = watchlist.get_watchlist("alice").unwrap();
    let titles: Vec<(&str, bool)> = items
        .iter()
        .map(|i| (i.movie_title.as_str(), i.watched))
        .collect();
    assert_eq!(titles, vec![("Heat", false), ("Alien", true)]);

    let receipt = watchlist.remove_from_watchlist("alice", "Heat").unwrap();
    assert_eq!(receipt.movie_title, "Heat");

    let err = watchlist.remove_from_watchlist("alice", "Heat").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = watchlist.get_watchlist("bob").unwrap_err();
    assert_eq!(err.to_string(), "User 'bob' not found.");
}

#[test]
fn events_are_recorded_for_mutations() {
    let (_dir, state) = bootstrap();
    let id = create(&state, "Burger", "American", "9.99", "LOW");
    state.kitchen_service.update_meal_stats(id, "win").unwrap();
    state.kitchen_service.delete_meal(id).unwrap();

    let kinds: Vec<String> = state
        .event_bus
        .get_event_log()
        .into_iter()
        .map(|e| e.event_type)
        .collect();
    assert_eq!(kinds, vec!["MealCreated", "MealStatsUpdated", "MealDeleted"]);
}
