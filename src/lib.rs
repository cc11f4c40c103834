//! golfbank: settlement engine and HTTP API for the BANK golf wagering game.
//!
//! The authoritative state of a game is its setup plus the confirmed-hole
//! history; every derived number (points, titles, side-pool points, cash) is
//! recomputed by replaying that history from hole 1. The HTTP layer is a thin
//! shell over the pure engine.

pub mod api;
pub mod config;
pub mod datasource;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use error::AppError;
