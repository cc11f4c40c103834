//! Per-hole score entries.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::event::HoleEvent;
use super::primitives::PlayerName;

/// Lowest accepted raw stroke count.
pub const MIN_STROKES: u32 = 1;

/// Highest accepted raw stroke count.
pub const MAX_STROKES: u32 = 15;

/// One player's raw result on one hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleEntry {
    pub strokes: u32,
    #[serde(default)]
    pub events: BTreeSet<HoleEvent>,
    #[serde(default)]
    pub confirmed: bool,
}

impl HoleEntry {
    pub fn strokes_in_range(&self) -> bool {
        (MIN_STROKES..=MAX_STROKES).contains(&self.strokes)
    }
}

/// All entries for one hole, keyed by player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HoleSheet {
    #[serde(default)]
    pub entries: BTreeMap<PlayerName, HoleEntry>,
}

impl HoleSheet {
    /// A hole is settled once every listed player has a confirmed entry.
    /// Settled sheets are treated as append-only history.
    pub fn is_settled(&self, players: &[PlayerName]) -> bool {
        players
            .iter()
            .all(|p| self.entries.get(p).map(|e| e.confirmed).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(strokes: u32, confirmed: bool) -> HoleEntry {
        HoleEntry {
            strokes,
            events: BTreeSet::new(),
            confirmed,
        }
    }

    #[test]
    fn test_strokes_in_range() {
        assert!(entry(1, true).strokes_in_range());
        assert!(entry(15, true).strokes_in_range());
        assert!(!entry(0, true).strokes_in_range());
        assert!(!entry(16, true).strokes_in_range());
    }

    #[test]
    fn test_sheet_settled_requires_all_confirmed() {
        let alice = PlayerName::new("Alice");
        let bob = PlayerName::new("Bob");
        let players = vec![alice.clone(), bob.clone()];

        let mut sheet = HoleSheet::default();
        assert!(!sheet.is_settled(&players));

        sheet.entries.insert(alice.clone(), entry(4, true));
        assert!(!sheet.is_settled(&players));

        sheet.entries.insert(bob.clone(), entry(5, false));
        assert!(!sheet.is_settled(&players));

        sheet.entries.insert(bob, entry(5, true));
        assert!(sheet.is_settled(&players));
    }
}
