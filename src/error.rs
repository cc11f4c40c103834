use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::datasource::DataSourceError;
use crate::domain::GameError;
use crate::orchestration::ResettleError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal server error: {0}")]
    Internal(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<DataSourceError> for AppError {
    fn from(err: DataSourceError) -> Self {
        match err {
            DataSourceError::UnknownArea { .. }
            | DataSourceError::WrongHoleCount { .. }
            | DataSourceError::DuplicateHole { .. } => AppError::BadRequest(err.to_string()),
            DataSourceError::Unreadable { .. } | DataSourceError::BadRow { .. } => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl From<ResettleError> for AppError {
    fn from(err: ResettleError) -> Self {
        match err {
            ResettleError::NotFound(id) => AppError::NotFound(id),
            ResettleError::Rejected(game_err) => game_err.into(),
            ResettleError::Db(db_err) => db_err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
