//! Course and player data loading.
//!
//! Course layouts come from a CSV database with one row per hole
//! (`course_name,area,hole,par,hcp`); the player registry is a CSV with a
//! `name` column. Both are read once at startup.

use crate::domain::NineHoles;
use thiserror::Error;

pub mod csv_course;
pub mod mock;
pub mod players;

pub use csv_course::CsvCourseDb;
pub use mock::MockCourseDb;
pub use players::load_player_names;

/// Source of nine-hole course areas.
///
/// The caller concatenates a front and a back area into an 18-hole round;
/// an area that does not resolve to exactly nine uniquely numbered holes is
/// rejected here, before any game is created.
pub trait CourseSource: Send + Sync {
    /// Known course names, sorted, deduplicated.
    fn course_names(&self) -> Vec<String>;

    /// Area names for a course, sorted.
    fn area_names(&self, course: &str) -> Vec<String>;

    /// Resolve `(course, area)` to its nine holes ordered by hole number.
    fn nine(&self, course: &str, area: &str) -> Result<NineHoles, DataSourceError>;
}

/// Error type for data loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("cannot read {path}: {message}")]
    Unreadable { path: String, message: String },
    #[error("bad row in {path}: {message}")]
    BadRow { path: String, message: String },
    #[error("unknown course area {course:?}/{area:?}")]
    UnknownArea { course: String, area: String },
    #[error("area {course:?}/{area:?} has {count} holes, expected 9")]
    WrongHoleCount {
        course: String,
        area: String,
        count: usize,
    },
    #[error("area {course:?}/{area:?} repeats hole {hole}")]
    DuplicateHole {
        course: String,
        area: String,
        hole: u8,
    },
}
