//! Player titles earned from point balances.

use serde::{Deserialize, Serialize};

/// Title held by a player. Gates penalty exposure: only titled players
/// lose points for declared events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Title {
    #[default]
    None,
    Rich,
    SuperRich,
}

impl Title {
    pub fn is_titled(&self) -> bool {
        !matches!(self, Title::None)
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Title::None => write!(f, "-"),
            Title::Rich => write!(f, "Rich Man"),
            Title::SuperRich => write!(f, "Super Rich Man"),
        }
    }
}
