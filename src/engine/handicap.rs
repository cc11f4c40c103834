//! Handicap stroke allowance for pairwise comparisons.

use crate::domain::Handicap;

/// Whether `receiver` gets a one-stroke allowance against `giver` on a hole.
///
/// Standard net-score allocation: the higher-handicap player receives strokes
/// on the hardest holes first (stroke index 1 upward), one per hole, up to
/// the handicap differential. Equal handicaps never adjust.
pub fn receives_stroke(receiver: Handicap, giver: Handicap, stroke_index: u8) -> bool {
    let diff = receiver.diff(giver);
    diff > 0 && i16::from(stroke_index) <= diff
}

/// Adjusted scores for an ordered pair on one hole.
pub fn adjust_pair(
    raw_a: u32,
    raw_b: u32,
    hcp_a: Handicap,
    hcp_b: Handicap,
    stroke_index: u8,
) -> (i64, i64) {
    let mut adj_a = i64::from(raw_a);
    let mut adj_b = i64::from(raw_b);
    if receives_stroke(hcp_a, hcp_b, stroke_index) {
        adj_a -= 1;
    } else if receives_stroke(hcp_b, hcp_a, stroke_index) {
        adj_b -= 1;
    }
    (adj_a, adj_b)
}
