//! The authoritative game record.
//!
//! A record holds the immutable setup (players, handicaps, course layout,
//! stakes) and the confirmed-hole history. Everything else (points, titles,
//! side-pool points, logs) is derived by the settlement engine on every pass
//! and is never the source of truth.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::course::{Round, HOLES_PER_ROUND};
use super::entry::{HoleEntry, HoleSheet};
use super::primitives::{GameId, Handicap, PlayerName};

/// Minimum players per game.
pub const MIN_PLAYERS: usize = 2;

/// Maximum players per game.
pub const MAX_PLAYERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub players: Vec<PlayerName>,
    pub handicaps: BTreeMap<PlayerName, Handicap>,
    pub course: String,
    pub front_area: String,
    pub back_area: String,
    pub round: Round,
    /// Per-point stake for the bank pool.
    pub bank_stake: i64,
    /// Per-point stake for the side pool; `None` disables the side pool.
    pub side_stake: Option<i64>,
    /// One sheet per hole, index 0..18. Settled sheets are append-only.
    pub holes: Vec<HoleSheet>,
}

impl GameRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        game_id: GameId,
        players: Vec<(PlayerName, Handicap)>,
        course: String,
        front_area: String,
        back_area: String,
        round: Round,
        bank_stake: i64,
        side_stake: Option<i64>,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(GameError::PlayerCount(players.len()));
        }

        let mut names = Vec::with_capacity(players.len());
        let mut handicaps = BTreeMap::new();
        for (name, handicap) in players {
            if handicaps.insert(name.clone(), handicap).is_some() {
                return Err(GameError::DuplicatePlayer(name.to_string()));
            }
            names.push(name);
        }

        Ok(GameRecord {
            game_id,
            players: names,
            handicaps,
            course,
            front_area,
            back_area,
            round,
            bank_stake,
            side_stake,
            holes: vec![HoleSheet::default(); HOLES_PER_ROUND],
        })
    }

    pub fn handicap_of(&self, player: &PlayerName) -> Handicap {
        self.handicaps.get(player).copied().unwrap_or_default()
    }

    /// Record (or re-record) entries for an unsettled hole.
    ///
    /// `hole_index` is 0-based. Rejects writes to settled holes: once every
    /// player's entry is confirmed the sheet is history and must not change.
    pub fn record_hole(
        &mut self,
        hole_index: usize,
        entries: BTreeMap<PlayerName, HoleEntry>,
    ) -> Result<(), GameError> {
        if hole_index >= HOLES_PER_ROUND {
            return Err(GameError::HoleOutOfRange(hole_index + 1));
        }
        if self.holes[hole_index].is_settled(&self.players) {
            return Err(GameError::HoleAlreadyConfirmed(hole_index + 1));
        }
        for (player, entry) in &entries {
            if !self.players.contains(player) {
                return Err(GameError::UnknownPlayer(player.to_string()));
            }
            if !entry.strokes_in_range() {
                return Err(GameError::InvalidStrokes(entry.strokes));
            }
        }
        self.holes[hole_index].entries.extend(entries);
        Ok(())
    }

    /// Settled holes in play order: `(hole_index, sheet)` pairs.
    ///
    /// Unconfirmed holes are not played yet and contribute nothing; the
    /// settlement fold (and the side-pool chase walk) operates on this
    /// sequence only.
    pub fn settled_holes(&self) -> impl Iterator<Item = (usize, &HoleSheet)> {
        self.holes
            .iter()
            .enumerate()
            .filter(|(_, sheet)| sheet.is_settled(&self.players))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game needs 2 to 4 players, got {0}")]
    PlayerCount(usize),
    #[error("duplicate player name {0:?}")]
    DuplicatePlayer(String),
    #[error("player {0:?} is not part of this game")]
    UnknownPlayer(String),
    #[error("hole {0} is out of range 1..=18")]
    HoleOutOfRange(usize),
    #[error("hole {0} is already confirmed and cannot be rewritten")]
    HoleAlreadyConfirmed(usize),
    #[error("stroke count {0} is outside 1..=15")]
    InvalidStrokes(u32),
}
