// src/application/mod.rs
//
// Application layer: the boundary a routing layer talks to.

pub mod state;

pub use state::AppState;
