//! End-of-round cash summary.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{GameId, Title};
use crate::engine::zero_sum_cash;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub game_id: GameId,
    pub completed_holes: u32,
    pub bank_stake: i64,
    pub side_stake: Option<i64>,
    pub rows: Vec<SummaryRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub player: String,
    pub points: i64,
    pub title: Title,
    pub side_points: i64,
    pub bank_net: i64,
    pub side_net: i64,
    pub total_net: i64,
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>, AppError> {
    let game_id = GameId::parse(&id).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let (game, derived) = state.resettler.resettle(&game_id).await?;

    let bank_cash = zero_sum_cash(&derived.points, game.bank_stake);
    let side_cash = game
        .side_stake
        .map(|stake| zero_sum_cash(&derived.side_points, stake));

    let mut rows: Vec<SummaryRow> = game
        .players
        .iter()
        .map(|player| {
            let bank_net = bank_cash.get(player).copied().unwrap_or(0);
            let side_net = side_cash
                .as_ref()
                .and_then(|c| c.get(player).copied())
                .unwrap_or(0);
            SummaryRow {
                player: player.to_string(),
                points: derived.points.get(player).copied().unwrap_or(0),
                title: derived.titles.get(player).copied().unwrap_or_default(),
                side_points: derived.side_points.get(player).copied().unwrap_or(0),
                bank_net,
                side_net,
                total_net: bank_net + side_net,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.total_net.cmp(&a.total_net).then(a.player.cmp(&b.player)));

    Ok(Json(SummaryResponse {
        game_id: game.game_id,
        completed_holes: derived.holes_settled,
        bank_stake: game.bank_stake,
        side_stake: game.side_stake,
        rows,
    }))
}
