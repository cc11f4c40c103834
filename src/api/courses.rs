use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesResponse {
    /// Course name to its area names, both sorted.
    pub courses: BTreeMap<String, Vec<String>>,
}

/// Known courses and their nine-hole areas, for game setup.
pub async fn get_courses(State(state): State<AppState>) -> Json<CoursesResponse> {
    let courses = state
        .courses
        .course_names()
        .into_iter()
        .map(|name| {
            let areas = state.courses.area_names(&name);
            (name, areas)
        })
        .collect();
    Json(CoursesResponse { courses })
}
