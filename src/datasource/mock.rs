//! In-memory course source for tests.

use std::collections::BTreeMap;

use crate::domain::{HoleSpec, NineHoles};

use super::{CourseSource, DataSourceError};

/// Course source backed by hand-built areas.
#[derive(Debug, Clone, Default)]
pub struct MockCourseDb {
    areas: BTreeMap<(String, String), NineHoles>,
}

impl MockCourseDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// A course named "Sunrise" with "East" and "West" areas, all par 4,
    /// stroke indexes 1..=9.
    pub fn with_standard_course() -> Self {
        let nine = || {
            NineHoles::new(
                (1..=9)
                    .map(|i| HoleSpec {
                        par: 4,
                        stroke_index: i,
                    })
                    .collect(),
            )
            .expect("standard nine is valid")
        };
        let mut mock = Self::new();
        mock.insert("Sunrise", "East", nine());
        mock.insert("Sunrise", "West", nine());
        mock
    }

    pub fn insert(&mut self, course: &str, area: &str, nine: NineHoles) {
        self.areas
            .insert((course.to_string(), area.to_string()), nine);
    }
}

impl CourseSource for MockCourseDb {
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
        self.areas
            .get(&(course.to_string(), area.to_string()))
            .cloned()
            .ok_or_else(|| DataSourceError::UnknownArea {
                course: course.to_string(),
                area: area.to_string(),
            })
    }
}
