//! Side-pool points with retroactive tie chasing.
//!
//! Independent of the bank: its own per-player totals, settled per hole.
//! Ties never award side points directly; their single point sits unclaimed
//! until a later win "chases" it. Chase depth scales with how strong the
//! winning score was.

use std::collections::BTreeMap;

use crate::domain::PlayerName;

/// How many prior holes a winning score may chase.
pub fn chase_depth(raw_strokes: u32, par: u8) -> u32 {
    let par = u32::from(par);
    if raw_strokes + 2 <= par {
        3 // eagle or better
    } else if raw_strokes + 1 == par {
        2 // birdie
    } else if raw_strokes == par {
        1
    } else {
        0 // a win over par (via handicap) earns no chase
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Win,
    UnclaimedTie,
    ClaimedTie,
}

/// Per-settlement side-pool ledger. Rebuilt from scratch on every pass;
/// the tie-claim flags are derived state, never persisted independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePool {
    points: BTreeMap<PlayerName, i64>,
    history: Vec<Slot>,
}

impl SidePool {
    pub fn new(players: &[PlayerName]) -> Self {
        SidePool {
            points: players.iter().map(|p| (p.clone(), 0)).collect(),
            history: Vec::new(),
        }
    }

    /// Record a tied hole: one claimable point enters the pool history.
    pub fn record_tie(&mut self) {
        self.history.push(Slot::UnclaimedTie);
    }

    /// Record a win and return the points awarded (base 1 + chased ties).
    ///
    /// The chase walks backward over the settled-hole sequence, claiming up
    /// to `chase_depth` contiguous unclaimed ties. It stops at the first
    /// slot that is not an unclaimed tie; wins and already-claimed ties are
    /// never stepped over.
    pub fn record_win(&mut self, winner: &PlayerName, raw_strokes: u32, par: u8) -> i64 {
        let mut award = 1;
        let depth = chase_depth(raw_strokes, par);

        let mut cursor = self.history.len();
        for _ in 0..depth {
            if cursor == 0 {
                break;
            }
            cursor -= 1;
            match self.history[cursor] {
                Slot::UnclaimedTie => {
                    self.history[cursor] = Slot::ClaimedTie;
                    award += 1;
                }
                Slot::Win | Slot::ClaimedTie => break,
            }
        }

        self.history.push(Slot::Win);
        if let Some(total) = self.points.get_mut(winner) {
            *total += award;
        }
        award
    }

    pub fn points(&self) -> &BTreeMap<PlayerName, i64> {
        &self.points
    }

    pub fn into_points(self) -> BTreeMap<PlayerName, i64> {
        self.points
    }
}
