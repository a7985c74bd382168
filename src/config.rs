use dotenvy::dotenv;
use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// A member counts as online while `last_seen` is within this window.
    pub presence_window_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:chat.db".into());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        let presence_window_minutes = match env::var("PRESENCE_WINDOW_MINUTES") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::Config("PRESENCE_WINDOW_MINUTES must be a positive integer".into())
            })?,
            Err(_) => 5,
        };
        if presence_window_minutes <= 0 {
            return Err(AppError::Config(
                "PRESENCE_WINDOW_MINUTES must be a positive integer".into(),
            ));
        }

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            presence_window_minutes,
        })
    }
}
