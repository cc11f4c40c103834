//! Course layout: par and stroke index per hole.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Holes in a full round (front nine + back nine).
pub const HOLES_PER_ROUND: usize = 18;

/// Holes in one course area.
pub const HOLES_PER_AREA: usize = 9;

/// Par and stroke index for a single hole.
///
/// The stroke index ranks difficulty 1..=18 (1 = hardest) and allocates
/// handicap strokes: the higher-handicap player receives a stroke on every
/// hole whose index is within the handicap differential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleSpec {
    pub par: u8,
    pub stroke_index: u8,
}

/// An ordered nine-hole course area, holes 1..=9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NineHoles(Vec<HoleSpec>);

impl NineHoles {
    pub fn new(holes: Vec<HoleSpec>) -> Result<Self, CourseError> {
        if holes.len() != HOLES_PER_AREA {
            return Err(CourseError::WrongHoleCount(holes.len()));
        }
        for spec in &holes {
            if spec.par == 0 || spec.stroke_index == 0 || spec.stroke_index > 18 {
                return Err(CourseError::InvalidSpec {
                    par: spec.par,
                    stroke_index: spec.stroke_index,
                });
            }
        }
        Ok(NineHoles(holes))
    }

    pub fn holes(&self) -> &[HoleSpec] {
        &self.0
    }
}

/// A full 18-hole round: a front nine followed by a back nine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round(Vec<HoleSpec>);

impl Round {
    pub fn new(front: NineHoles, back: NineHoles) -> Self {
        let mut holes = front.0;
        holes.extend(back.0);
        Round(holes)
    }

    /// Spec for the hole at `index` (0-based, < 18).
    pub fn hole(&self, index: usize) -> &HoleSpec {
        &self.0[index]
    }

    pub fn holes(&self) -> &[HoleSpec] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    #[error("a course area must have exactly 9 holes, got {0}")]
    WrongHoleCount(usize),
    #[error("invalid hole spec: par {par}, stroke index {stroke_index}")]
    InvalidSpec { par: u8, stroke_index: u8 },
}
