// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod kitchen_service;
pub mod watchlist_service;

pub use kitchen_service::{CreateMealRequest, KitchenService};
pub use watchlist_service::WatchlistService;
