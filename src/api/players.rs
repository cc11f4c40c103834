use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersResponse {
    pub players: Vec<String>,
}

/// Known player names from the registry CSV.
pub async fn get_players(State(state): State<AppState>) -> Json<PlayersResponse> {
    Json(PlayersResponse {
        players: state.registry.as_ref().clone(),
    })
}
