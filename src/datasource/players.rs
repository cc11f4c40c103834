//! Player registry loading.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::DataSourceError;

#[derive(Debug, Deserialize)]
struct PlayerRow {
    name: String,
}

/// Load known player names from a CSV with a `name` column.
///
/// Blank names are dropped; order is preserved (the registry is append-only
/// from the operator side).
pub fn load_player_names(path: &str) -> Result<Vec<String>, DataSourceError> {
    let mut reader =
        csv::Reader::from_path(Path::new(path)).map_err(|e| DataSourceError::Unreadable {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    let mut names = Vec::new();
    for result in reader.deserialize() {
        let row: PlayerRow = result.map_err(|e| DataSourceError::BadRow {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let trimmed = row.name.trim();
        if !trimmed.is_empty() {
            names.push(trimmed.to_string());
        }
    }

    info!(path, players = names.len(), "player registry loaded");
    Ok(names)
}
