pub mod courses;
pub mod games;
pub mod health;
pub mod holes;
pub mod players;
pub mod summary;

use crate::config::Config;
use crate::datasource::CourseSource;
use crate::db::Repository;
use crate::orchestration::Resettler;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
    pub courses: Arc<dyn CourseSource>,
    pub resettler: Arc<Resettler>,
    pub registry: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(
        repo: Arc<Repository>,
        config: Config,
        courses: Arc<dyn CourseSource>,
        resettler: Arc<Resettler>,
        registry: Arc<Vec<String>>,
    ) -> Self {
        Self {
            repo,
            config,
            courses,
            resettler,
            registry,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/players", get(players::get_players))
        .route("/v1/courses", get(courses::get_courses))
        .route("/v1/games", post(games::create_game))
        .route("/v1/games/:id", get(games::get_game))
        .route("/v1/games/:id/holes/:hole", put(holes::put_hole))
        .route("/v1/games/:id/summary", get(summary::get_summary))
        .layer(cors)
        .with_state(state)
}
