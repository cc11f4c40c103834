//! Hole entry and confirmation.
//!
//! A PUT carries the full sheet for one hole. Unconfirmed writes stage
//! scores; a confirmed write settles the hole and triggers a full replay.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::{GameId, HoleEntry, HoleEvent, PlayerName, Title, HOLES_PER_ROUND};
use crate::engine::HoleOutcome;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PutHoleRequest {
    pub entries: BTreeMap<PlayerName, EntrySpec>,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct EntrySpec {
    pub strokes: u32,
    #[serde(default)]
    pub events: Vec<HoleEvent>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutHoleResponse {
    pub game_id: GameId,
    pub hole_no: u8,
    /// Present once the hole is settled; `None` for a staged write.
    pub outcome: Option<HoleOutcome>,
    pub points: BTreeMap<PlayerName, i64>,
    pub titles: BTreeMap<PlayerName, Title>,
    pub side_points: BTreeMap<PlayerName, i64>,
    pub bank: i64,
    pub holes_settled: u32,
}

pub async fn put_hole(
    State(state): State<AppState>,
    Path((id, hole_no)): Path<(String, u8)>,
    Json(req): Json<PutHoleRequest>,
) -> Result<Json<PutHoleResponse>, AppError> {
    let game_id = GameId::parse(&id).map_err(|e| AppError::BadRequest(e.to_string()))?;
    if !(1..=HOLES_PER_ROUND as u8).contains(&hole_no) {
        return Err(AppError::BadRequest(format!(
            "hole {hole_no} is out of range 1..=18"
        )));
    }

    let entries: BTreeMap<PlayerName, HoleEntry> = req
        .entries
        .into_iter()
        .map(|(player, spec)| {
            (
                player,
                HoleEntry {
                    strokes: spec.strokes,
                    events: spec.events.into_iter().collect(),
                    confirmed: req.confirmed,
                },
            )
        })
        .collect();

    let (game, derived) = state
        .resettler
        .apply_hole(&game_id, usize::from(hole_no) - 1, entries)
        .await?;

    let outcome = derived
        .outcomes
        .iter()
        .find(|o| o.hole_no == hole_no)
        .cloned();

    Ok(Json(PutHoleResponse {
        game_id: game.game_id,
        hole_no,
        outcome,
        points: derived.points,
        titles: derived.titles,
        side_points: derived.side_points,
        bank: derived.bank,
        holes_settled: derived.holes_settled,
    }))
}
