// src/error/mod.rs
//
// Application error type shared by repositories and services

pub mod types;

pub use types::{AppError, AppResult};
