//! Event penalties for titled players.

use std::collections::BTreeSet;

use crate::domain::{HoleEvent, Title};

/// Penalty cap per player per hole.
pub const MAX_PENALTY_PER_HOLE: i64 = 3;

/// Penalty points for a player's declared events, before the balance clamp.
///
/// Untitled players are never penalized. Titled players lose one point per
/// penalty-triggering event; a SuperRich player additionally pays one point
/// for declaring par-on-green. Capped at 3 per hole. The caller clamps the
/// actual deduction at the player's balance so it never goes negative.
pub fn penalty_points(title: Title, events: &BTreeSet<HoleEvent>) -> i64 {
    if !title.is_titled() {
        return 0;
    }

    let mut penalty = events.iter().filter(|e| e.is_penalty_trigger()).count() as i64;
    if title == Title::SuperRich && events.contains(&HoleEvent::ParOnGreen) {
        penalty += 1;
    }
    penalty.min(MAX_PENALTY_PER_HOLE)
}
