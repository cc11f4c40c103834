use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub course_db_path: String,
    pub players_csv_path: Option<String>,
    /// Base URL encoded into viewer share links.
    pub viewer_base_url: String,
    /// Local offset applied when stamping game-id dates (course-local time).
    pub utc_offset_hours: i8,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let course_db_path = env_map
            .get("COURSE_DB_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("COURSE_DB_PATH".to_string()))?;

        let players_csv_path = env_map.get("PLAYERS_CSV_PATH").cloned();

        let viewer_base_url = env_map
            .get("VIEWER_BASE_URL")
            .cloned()
            .unwrap_or_else(|| "http://localhost:8080".to_string());

        let utc_offset_hours = env_map
            .get("UTC_OFFSET_HOURS")
            .map(|s| s.as_str())
            .unwrap_or("8")
            .parse::<i8>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "UTC_OFFSET_HOURS".to_string(),
                    "must be a small signed integer".to_string(),
                )
            })?;
        if !(-12..=14).contains(&utc_offset_hours) {
            return Err(ConfigError::InvalidValue(
                "UTC_OFFSET_HOURS".to_string(),
                "must be between -12 and 14".to_string(),
            ));
        }

        Ok(Config {
            port,
            database_path,
            course_db_path,
            players_csv_path,
            viewer_base_url,
            utc_offset_hours,
        })
    }

    /// Viewer share URL for a game.
    pub fn share_url(&self, game_id: &str) -> String {
        format!("{}?mode=view&game_id={}", self.viewer_base_url, game_id)
    }
}
