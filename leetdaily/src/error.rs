//! Error types for leetdaily
//!
//! All errors use thiserror for structured error handling.
//! Gateway failures never surface through this type to callers of the
//! assistance service; they are converted to fallback text at that boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Record for {date} uses schema version {version}, which this build does not understand")]
    UnsupportedSchema { date: String, version: i64 },

    #[error("Another assistance request is still pending")]
    AssistanceBusy,

    #[error("Assistance error: {0}")]
    Assistance(String),

    #[error("{0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
