//! Diagnoze API: library crate for the triage REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `dz-e2e-tests`) can reach `AppState`, `build_router` and the chat
//! backends.

pub mod chat;
pub mod config;
pub mod error;
pub mod predictors;
pub mod routes;
pub mod state;
