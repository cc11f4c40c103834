//! Domain primitives: PlayerName, Handicap, GameId.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A player's unique display name within a game.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(pub String);

impl PlayerName {
    pub fn new(name: impl Into<String>) -> Self {
        PlayerName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declared playing handicap, 0 through 54.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Handicap(u8);

impl Handicap {
    pub const MAX: u8 = 54;

    pub fn new(value: u8) -> Result<Self, HandicapError> {
        if value > Self::MAX {
            return Err(HandicapError::OutOfRange(value));
        }
        Ok(Handicap(value))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Signed stroke differential against another handicap.
    pub fn diff(&self, other: Handicap) -> i16 {
        i16::from(self.0) - i16::from(other.0)
    }
}

impl TryFrom<u8> for Handicap {
    type Error = HandicapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Handicap::new(value)
    }
}

impl From<Handicap> for u8 {
    fn from(h: Handicap) -> u8 {
        h.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandicapError {
    #[error("handicap {0} exceeds the maximum of 54")]
    OutOfRange(u8),
}

/// Game record identifier in the form `YYMMDD_NN`.
///
/// `NN` is a zero-padded two-digit same-day sequence number starting at 01.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(date: &str, seq: u32) -> Self {
        GameId(format!("{}_{:02}", date, seq))
    }

    pub fn parse(raw: &str) -> Result<Self, GameIdParseError> {
        let (date, seq) = raw
            .split_once('_')
            .ok_or_else(|| GameIdParseError::BadFormat(raw.to_string()))?;
        if date.len() != 6 || !date.chars().all(|c| c.is_ascii_digit()) {
            return Err(GameIdParseError::BadFormat(raw.to_string()));
        }
        if seq.len() < 2 || seq.parse::<u32>().is_err() {
            return Err(GameIdParseError::BadFormat(raw.to_string()));
        }
        Ok(GameId(raw.to_string()))
    }

    /// The `YYMMDD` date part.
    pub fn date_part(&self) -> &str {
        self.0.split_once('_').map(|(d, _)| d).unwrap_or("")
    }

    /// The same-day sequence number.
    pub fn seq(&self) -> u32 {
        self.0
            .split_once('_')
            .and_then(|(_, s)| s.parse().ok())
            .unwrap_or(0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameIdParseError {
    #[error("game id {0:?} does not match YYMMDD_NN")]
    BadFormat(String),
}
