//! Game creation and viewing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::AppState;
use crate::domain::{GameId, GameRecord, Handicap, PlayerName, Round};
use crate::engine::Settlement;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub players: Vec<PlayerSpec>,
    pub course: String,
    pub front_area: String,
    pub back_area: String,
    pub bank_stake: i64,
    #[serde(default)]
    pub side_stake: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub handicap: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub game_id: GameId,
    pub share_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub game: GameRecord,
    pub derived: Settlement,
    pub share_url: String,
}

pub async fn create_game(
    State(state): State<AppState>,
    Json(req): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<CreateGameResponse>), AppError> {
    if req.bank_stake <= 0 {
        return Err(AppError::BadRequest(
            "bankStake must be positive".to_string(),
        ));
    }
    if let Some(side) = req.side_stake {
        if side <= 0 {
            return Err(AppError::BadRequest(
                "sideStake must be positive when set".to_string(),
            ));
        }
    }

    let mut players = Vec::with_capacity(req.players.len());
    for spec in &req.players {
        if spec.name.trim().is_empty() {
            return Err(AppError::BadRequest("player name is empty".to_string()));
        }
        let handicap = Handicap::new(spec.handicap)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        players.push((PlayerName::new(spec.name.trim()), handicap));
    }

    let front = state.courses.nine(&req.course, &req.front_area)?;
    let back = state.courses.nine(&req.course, &req.back_area)?;
    let round = Round::new(front, back);

    // Game ids are dated in course-local time, not UTC.
    let offset = FixedOffset::east_opt(i32::from(state.config.utc_offset_hours) * 3600)
        .ok_or_else(|| AppError::Config("invalid utc offset".to_string()))?;
    let date = Utc::now().with_timezone(&offset).format("%y%m%d").to_string();
    let seq = state.repo.next_game_seq(&date).await?;
    let game_id = GameId::new(&date, seq);

    let record = GameRecord::new(
        game_id.clone(),
        players,
        req.course,
        req.front_area,
        req.back_area,
        round,
        req.bank_stake,
        req.side_stake,
    )?;
    state.resettler.create(&record).await?;

    info!(game_id = %game_id, course = %record.course, "new game");
    Ok((
        StatusCode::CREATED,
        Json(CreateGameResponse {
            share_url: state.config.share_url(game_id.as_str()),
            game_id,
        }),
    ))
}

pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameView>, AppError> {
    let game_id = GameId::parse(&id).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let (game, derived) = state.resettler.resettle(&game_id).await?;

    Ok(Json(GameView {
        share_url: state.config.share_url(game.game_id.as_str()),
        game,
        derived,
    }))
}
