//! Full-history resettlement.
//!
//! Every write path funnels through here: load the authoritative record,
//! apply the change, replay the whole game with the pure engine, persist the
//! fresh snapshot. No incremental settlement state exists anywhere.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::db::Repository;
use crate::domain::{GameError, GameId, GameRecord, HoleEntry, PlayerName};
use crate::engine::{settle, Settlement};

pub struct Resettler {
    repo: Arc<Repository>,
}

impl Resettler {
    pub fn new(repo: Arc<Repository>) -> Self {
        Resettler { repo }
    }

    /// Persist a freshly created game with its (empty) settlement.
    pub async fn create(&self, record: &GameRecord) -> Result<Settlement, ResettleError> {
        let derived = settle(record);
        self.repo.store_game(record, Some(&derived)).await?;
        info!(game_id = %record.game_id, players = record.players.len(), "game created");
        Ok(derived)
    }

    /// Load a record and its snapshot, failing if the game does not exist.
    pub async fn load(
        &self,
        game_id: &GameId,
    ) -> Result<(GameRecord, Option<Settlement>), ResettleError> {
        self.repo
            .load_game(game_id)
            .await?
            .ok_or_else(|| ResettleError::NotFound(game_id.to_string()))
    }

    /// Apply hole entries and replay the whole game.
    ///
    /// The settlement is computed before the write; if persistence fails the
    /// caller still receives the error and can retry the whole call, never a
    /// half-written derived state.
    pub async fn apply_hole(
        &self,
        game_id: &GameId,
        hole_index: usize,
        entries: BTreeMap<PlayerName, HoleEntry>,
    ) -> Result<(GameRecord, Settlement), ResettleError> {
        let (mut record, _) = self.load(game_id).await?;
        record.record_hole(hole_index, entries)?;

        let derived = settle(&record);
        self.repo.store_game(&record, Some(&derived)).await?;
        info!(
            game_id = %game_id,
            hole = hole_index + 1,
            holes_settled = derived.holes_settled,
            "game resettled"
        );
        Ok((record, derived))
    }

    /// Replay a stored game without modifying it.
    pub async fn resettle(&self, game_id: &GameId) -> Result<(GameRecord, Settlement), ResettleError> {
        let (record, _) = self.load(game_id).await?;
        let derived = settle(&record);
        Ok((record, derived))
    }
}

#[derive(Debug, Error)]
pub enum ResettleError {
    #[error("game {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Rejected(#[from] GameError),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::db::init_db;
    use crate::domain::{GameId, Handicap, HoleSpec, NineHoles, Round};
    use tempfile::TempDir;

    async fn resettler() -> (Resettler, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let pool = init_db(&db_path).await.expect("init_db failed");
        (Resettler::new(Arc::new(Repository::new(pool))), temp_dir)
    }

    fn record() -> GameRecord {
        let nine = || {
            NineHoles::new(
                (1..=9)
                    .map(|i| HoleSpec {
                        par: 4,
                        stroke_index: i,
                    })
                    .collect(),
            )
            .unwrap()
        };
        GameRecord::new(
            GameId::new("250829", 1),
            vec![
                (PlayerName::new("Alice"), Handicap::new(0).unwrap()),
                (PlayerName::new("Bob"), Handicap::new(0).unwrap()),
            ],
            "Sunrise".to_string(),
            "East".to_string(),
            "West".to_string(),
            Round::new(nine(), nine()),
            100,
            None,
        )
        .unwrap()
    }

    fn entries(alice: u32, bob: u32) -> BTreeMap<PlayerName, HoleEntry> {
        let mut map = BTreeMap::new();
        for (name, strokes) in [("Alice", alice), ("Bob", bob)] {
            map.insert(
                PlayerName::new(name),
                HoleEntry {
                    strokes,
                    events: BTreeSet::new(),
                    confirmed: true,
                },
            );
        }
        map
    }

    #[tokio::test]
    async fn test_apply_hole_persists_snapshot() {
        let (resettler, _temp) = resettler().await;
        let game = record();
        resettler.create(&game).await.unwrap();

        let (_, derived) = resettler
            .apply_hole(&game.game_id, 0, entries(4, 5))
            .await
            .unwrap();
        assert_eq!(derived.holes_settled, 1);

        let (_, snapshot) = resettler.load(&game.game_id).await.unwrap();
        assert_eq!(snapshot, Some(derived));
    }

    #[tokio::test]
    async fn test_apply_hole_unknown_game() {
        let (resettler, _temp) = resettler().await;
        let err = resettler
            .apply_hole(&GameId::new("250829", 9), 0, entries(4, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, ResettleError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_apply_hole_rejects_confirmed_rewrite() {
        let (resettler, _temp) = resettler().await;
        let game = record();
        resettler.create(&game).await.unwrap();
        resettler
            .apply_hole(&game.game_id, 0, entries(4, 5))
            .await
            .unwrap();

        let err = resettler
            .apply_hole(&game.game_id, 0, entries(3, 5))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ResettleError::Rejected(GameError::HoleAlreadyConfirmed(1))
        ));
    }

    #[tokio::test]
    async fn test_resettle_matches_stored_snapshot() {
        let (resettler, _temp) = resettler().await;
        let game = record();
        resettler.create(&game).await.unwrap();
        let (_, applied) = resettler
            .apply_hole(&game.game_id, 0, entries(4, 4))
            .await
            .unwrap();

        let (_, replayed) = resettler.resettle(&game.game_id).await.unwrap();
        assert_eq!(replayed, applied);
    }
}
