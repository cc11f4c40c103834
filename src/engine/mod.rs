//! Pure settlement engine for the BANK game.
//!
//! The engine holds no state of its own: `settle` replays the confirmed-hole
//! history from hole 1 on every call and derives points, titles, side-pool
//! points and log lines deterministically. The persisted record is the only
//! source of truth.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{PlayerName, Title};

pub mod bank;
pub mod driver;
pub mod handicap;
pub mod head_to_head;
pub mod penalty;
pub mod side_pool;
pub mod title;

pub use bank::BankLedger;
pub use driver::settle;
pub use side_pool::SidePool;

/// Result of one hole: a sole winner or a tie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeKind {
    Win { player: PlayerName },
    Tie,
}

/// Derived outcome for one settled hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleOutcome {
    /// 1-based hole number.
    pub hole_no: u8,
    pub kind: OutcomeKind,
    /// Points the winner took (bank + penalty pool + birdie bonus); 0 on a tie.
    pub bank_award: i64,
    /// Penalty points actually deducted across all players this hole.
    pub penalty_pool: i64,
    /// Points transferred from other players on a birdie win.
    pub birdie_bonus: i64,
    /// Side-pool points awarded to the winner (base + chase); 0 if disabled.
    pub side_points: i64,
    pub log: String,
}

/// Full derived state of a game after replaying all settled holes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub points: BTreeMap<PlayerName, i64>,
    pub titles: BTreeMap<PlayerName, Title>,
    pub side_points: BTreeMap<PlayerName, i64>,
    pub outcomes: Vec<HoleOutcome>,
    /// Bank pot carried into the next unplayed hole.
    pub bank: i64,
    pub holes_settled: u32,
}

impl Settlement {
    pub fn logs(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.log.as_str()).collect()
    }
}

/// Zero-sum cash conversion for a point pool.
///
/// With n players, a player's net is `(n * own_points - total_points) * stake`.
/// Nets always sum to zero across the table.
pub fn zero_sum_cash(points: &BTreeMap<PlayerName, i64>, stake: i64) -> BTreeMap<PlayerName, i64> {
    let n = points.len() as i64;
    let total: i64 = points.values().sum();
    points
        .iter()
        .map(|(player, &p)| (player.clone(), (n * p - total) * stake))
        .collect()
}
