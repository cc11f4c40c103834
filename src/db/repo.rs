//! Repository layer for game documents.
//!
//! Games are stored whole: the authoritative record and the latest derived
//! settlement snapshot are serialized to JSON and replaced on every write.
//! Concurrent writers get last-writer-wins semantics; serializing operator
//! writes is the caller's responsibility.

use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::{debug, warn};

use crate::domain::{GameId, GameRecord};
use crate::engine::Settlement;

pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Store a game document, replacing any previous version.
    pub async fn store_game(
        &self,
        record: &GameRecord,
        derived: Option<&Settlement>,
    ) -> Result<(), sqlx::Error> {
        let record_json = serde_json::to_string(record)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let derived_json = derived
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO games (game_id, created_date, record, derived, updated_ms)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.game_id.as_str())
        .bind(record.game_id.date_part())
        .bind(record_json)
        .bind(derived_json)
        .bind(Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;

        debug!(game_id = %record.game_id, "game document stored");
        Ok(())
    }

    /// Load a game document: the record plus its last derived snapshot.
    pub async fn load_game(
        &self,
        game_id: &GameId,
    ) -> Result<Option<(GameRecord, Option<Settlement>)>, sqlx::Error> {
        let row = sqlx::query("SELECT record, derived FROM games WHERE game_id = ?")
            .bind(game_id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let record_json: String = row.get("record");
        let record: GameRecord = serde_json::from_str(&record_json)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        let derived_json: Option<String> = row.get("derived");
        let derived = match derived_json {
            Some(json) => match serde_json::from_str(&json) {
                Ok(s) => Some(s),
                Err(e) => {
                    // A stale snapshot is recomputable; don't fail the read.
                    warn!(game_id = %game_id, error = %e, "discarding unreadable snapshot");
                    None
                }
            },
            None => None,
        };

        Ok(Some((record, derived)))
    }

    /// Next same-day sequence number for a `YYMMDD` date: max existing + 1.
    pub async fn next_game_seq(&self, date: &str) -> Result<u32, sqlx::Error> {
        let rows = sqlx::query("SELECT game_id FROM games WHERE created_date = ?")
            .bind(date)
            .fetch_all(&self.pool)
            .await?;

        let max_seq = rows
            .iter()
            .filter_map(|row| {
                let id: String = row.get("game_id");
                GameId::parse(&id).ok().map(|g| g.seq())
            })
            .max()
            .unwrap_or(0);

        Ok(max_seq + 1)
    }

}
