//! CSV-backed course database.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::course::CourseError;
use crate::domain::{HoleSpec, NineHoles};

use super::{CourseSource, DataSourceError};

#[derive(Debug, Deserialize)]
struct CourseRow {
    course_name: String,
    area: String,
    hole: u8,
    par: u8,
    hcp: u8,
}

/// In-memory index of a course CSV, keyed by (course, area).
#[derive(Debug, Clone)]
pub struct CsvCourseDb {
    areas: BTreeMap<(String, String), Vec<(u8, HoleSpec)>>,
}

impl CsvCourseDb {
    /// Load and index the whole course database.
    pub fn load(path: &str) -> Result<Self, DataSourceError> {
        let mut reader = csv::Reader::from_path(Path::new(path)).map_err(|e| {
            DataSourceError::Unreadable {
                path: path.to_string(),
                message: e.to_string(),
            }
        })?;

        let mut areas: BTreeMap<(String, String), Vec<(u8, HoleSpec)>> = BTreeMap::new();
        for result in reader.deserialize() {
            let row: CourseRow = result.map_err(|e| DataSourceError::BadRow {
                path: path.to_string(),
                message: e.to_string(),
            })?;
            areas
                .entry((row.course_name, row.area))
                .or_default()
                .push((
                    row.hole,
                    HoleSpec {
                        par: row.par,
                        stroke_index: row.hcp,
                    },
                ));
        }

        info!(path, areas = areas.len(), "course database loaded");
        Ok(CsvCourseDb { areas })
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<(String, String, u8, HoleSpec)>) -> Self {
        let mut areas: BTreeMap<(String, String), Vec<(u8, HoleSpec)>> = BTreeMap::new();
        for (course, area, hole, spec) in rows {
            areas.entry((course, area)).or_default().push((hole, spec));
        }
        CsvCourseDb { areas }
    }
}

impl CourseSource for CsvCourseDb {
    fn course_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.areas.keys().map(|(c, _)| c.clone()).collect();
        names.dedup();
        names
    }

    fn area_names(&self, course: &str) -> Vec<String> {
        self.areas
            .keys()
            .filter(|(c, _)| c == course)
            .map(|(_, a)| a.clone())
            .collect()
    }

    fn nine(&self, course: &str, area: &str) -> Result<NineHoles, DataSourceError> {
        let key = (course.to_string(), area.to_string());
        let rows = self
            .areas
            .get(&key)
            .ok_or_else(|| DataSourceError::UnknownArea {
                course: course.to_string(),
                area: area.to_string(),
            })?;

        let mut sorted = rows.clone();
        sorted.sort_by_key(|(hole, _)| *hole);
        for pair in sorted.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(DataSourceError::DuplicateHole {
                    course: course.to_string(),
                    area: area.to_string(),
                    hole: pair[0].0,
                });
            }
        }

        let specs: Vec<HoleSpec> = sorted.into_iter().map(|(_, spec)| spec).collect();
        NineHoles::new(specs).map_err(|e| match e {
            CourseError::WrongHoleCount(count) => DataSourceError::WrongHoleCount {
                course: course.to_string(),
                area: area.to_string(),
                count,
            },
            CourseError::InvalidSpec { .. } => DataSourceError::BadRow {
                path: format!("{}/{}", course, area),
                message: e.to_string(),
            },
        })
    }
}
