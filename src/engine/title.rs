//! Title transitions with hysteresis.

use crate::domain::Title;

/// Next title from the current title and the post-hole balance.
///
/// Promotion and demotion thresholds differ so titles do not flicker on
/// small swings: Rich holds until the balance hits exactly 0, SuperRich
/// holds until it drops below 4. A title earned this hole takes effect from
/// the next hole's penalty evaluation.
pub fn next_title(current: Title, balance: i64) -> Title {
    match current {
        Title::None => {
            if balance >= 8 {
                Title::SuperRich
            } else if balance >= 4 {
                Title::Rich
            } else {
                Title::None
            }
        }
        Title::Rich => {
            if balance >= 8 {
                Title::SuperRich
            } else if balance == 0 {
                Title::None
            } else {
                Title::Rich
            }
        }
        Title::SuperRich => {
            if balance < 4 {
                Title::Rich
            } else {
                Title::SuperRich
            }
        }
    }
}
