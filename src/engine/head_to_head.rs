//! Head-to-head hole resolution.

use std::collections::BTreeMap;

use crate::domain::{Handicap, PlayerName};

use super::handicap::adjust_pair;
use super::OutcomeKind;

/// Resolve one hole from raw strokes.
///
/// Every ordered pair is compared on handicap-adjusted scores; a player wins
/// the hole only by beating all n-1 opponents (strict total dominance). Any
/// numeric tie at the top means no winner.
///
/// # Panics
/// Panics if fewer than two players are given; upstream validation
/// guarantees 2..=4.
pub fn resolve(
    players: &[PlayerName],
    raw: &BTreeMap<PlayerName, u32>,
    handicaps: &BTreeMap<PlayerName, Handicap>,
    stroke_index: u8,
) -> OutcomeKind {
    assert!(players.len() >= 2, "hole resolution requires two players");

    let mut winners = Vec::new();
    for p1 in players {
        let mut beaten = 0;
        for p2 in players {
            if p1 == p2 {
                continue;
            }
            let (adj_1, adj_2) = adjust_pair(
                raw[p1],
                raw[p2],
                handicaps[p1],
                handicaps[p2],
                stroke_index,
            );
            if adj_1 < adj_2 {
                beaten += 1;
            }
        }
        if beaten == players.len() - 1 {
            winners.push(p1.clone());
        }
    }

    match winners.len() {
        1 => OutcomeKind::Win {
            player: winners.remove(0),
        },
        _ => OutcomeKind::Tie,
    }
}
