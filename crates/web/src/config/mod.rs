// Application configuration
//
// Built once in main and handed to handlers through AppState. Every value
// has a default, so the server runs with no environment at all.

use std::path::PathBuf;

use crate::auth::SessionConfig;

/// Default request body limit for uploads: 64 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub http_addr: String,
    /// SQLite URL for the credential store
    pub database_url: String,
    /// Keep credentials in memory instead of SQLite
    pub dev_mode: bool,
    /// Directory holding uploaded files
    pub upload_dir: PathBuf,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
    /// Session cookie settings
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_addr: "127.0.0.1:5000".to_string(),
            database_url: "sqlite://users.db?mode=rwc".to_string(),
            dev_mode: false,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `HTTP_ADDR`: bind address (default: 127.0.0.1:5000)
    /// - `DATABASE_URL`: SQLite URL (default: sqlite://users.db?mode=rwc)
    /// - `DEV_MODE`: "true" keeps credentials in memory
    /// - `UPLOAD_DIR`: upload directory (default: uploads)
    /// - `MAX_UPLOAD_BYTES`: request body limit
    /// - `SESSION_SECRET`, `SESSION_MAX_AGE`, `COOKIE_SECURE`: see SessionConfig
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            http_addr: std::env::var("HTTP_ADDR").unwrap_or(defaults.http_addr),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.database_url),
            dev_mode: std::env::var("DEV_MODE")
                .map(|s| s.to_lowercase() == "true" || s == "1")
                .unwrap_or(false),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
            session: SessionConfig::from_env(),
        }
    }
}
