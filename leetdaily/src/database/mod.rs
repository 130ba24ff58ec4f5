//! Database module
//!
//! Durable storage for daily records:
//! - Schema and migrations
//! - Model definitions
//! - Repository layer for record reads and whole-record writes

pub mod models;
pub mod repository;
pub mod schema;

pub use models::*;
pub use repository::Repository;
pub use schema::initialize_database;

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;

/// How long a command waits on a lock held by another `leetdaily` process
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the `daily_records` store at `db_path`, creating and migrating it if needed.
///
/// The pool holds one connection, so record writes from a single process
/// are serialised. With `synchronous = FULL` a save is on disk once it returns.
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    tracing::info!("Opening daily record store at: {:?}", db_path);

    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Full)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    initialize_database(&pool).await?;

    Ok(pool)
}
