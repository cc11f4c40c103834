//! Domain types for the BANK golf wagering game.
//!
//! This module provides:
//! - Closed enums for on-course events and titles (no string-keyed dictionaries)
//! - Domain primitives: PlayerName, Handicap, GameId
//! - Course layout types (par and stroke index per hole)
//! - The authoritative game record: setup plus confirmed-hole history

pub mod course;
pub mod entry;
pub mod event;
pub mod game;
pub mod primitives;
pub mod title;

pub use course::{HoleSpec, NineHoles, Round, HOLES_PER_ROUND};
pub use entry::{HoleEntry, HoleSheet, MAX_STROKES, MIN_STROKES};
pub use event::HoleEvent;
pub use game::{GameError, GameRecord, MAX_PLAYERS, MIN_PLAYERS};
pub use primitives::{GameId, GameIdParseError, Handicap, HandicapError, PlayerName};
pub use title::Title;
