//! Declared on-course events.

use serde::{Deserialize, Serialize};

/// Event a player can declare on a hole.
///
/// The wire codes are fixed for record compatibility: `sand`, `water`,
/// `out-of-bounds`, `lost-ball`, `three-putt-or-worse`, `par-on-green`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum HoleEvent {
    Sand,
    Water,
    OutOfBounds,
    LostBall,
    ThreePuttOrWorse,
    ParOnGreen,
}

impl HoleEvent {
    /// Whether the event counts against a titled player's balance.
    ///
    /// `ParOnGreen` is special-cased: it only penalizes SuperRich players,
    /// which the penalty engine handles separately.
    pub fn is_penalty_trigger(&self) -> bool {
        !matches!(self, HoleEvent::ParOnGreen)
    }

    pub fn all() -> [HoleEvent; 6] {
        [
            HoleEvent::Sand,
            HoleEvent::Water,
            HoleEvent::OutOfBounds,
            HoleEvent::LostBall,
            HoleEvent::ThreePuttOrWorse,
            HoleEvent::ParOnGreen,
        ]
    }
}
