//! Echocast Storage
//!
//! `SQLite` durable store for Echocast: track metadata, listening progress,
//! the ad-hoc queue, and playlists.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each feature owns its own queries and logic
//! - **Boundary Normalization**: rows are converted into the fixed shapes in
//!   `echocast-core` before they reach session logic
//! - **Independent Collections**: queue and playlist rows never cascade into
//!   each other; deleting a playlist touches only the playlist row
//!
//! # Example
//!
//! ```rust,no_run
//! use echocast_storage::{create_pool, run_migrations};
//! use echocast_core::types::UserId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://echocast.db").await?;
//! run_migrations(&pool).await?;
//!
//! let user = UserId::new("user-1");
//! let resumable = echocast_storage::progress::continue_listening(&pool, &user, 10).await?;
//! # Ok(())
//! # }
//! ```

mod context;

// Vertical slices
pub mod playlists;
pub mod progress;
pub mod queue;
pub mod tracks;

pub use context::StorageContext;

use echocast_core::error::Result;
use sqlx::sqlite::SqlitePool;

/// Run database migrations
///
/// Call once at application start to bring the schema up to date. Migrations
/// are embedded so tests and hosts need no external directory at run time.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    const MIGRATIONS: &[&str] = &[
        include_str!("../migrations/20250601000001_create_tracks.sql"),
        include_str!("../migrations/20250601000002_create_listening_progress.sql"),
        include_str!("../migrations/20250601000003_create_queue_entries.sql"),
        include_str!("../migrations/20250601000004_create_playlists.sql"),
    ];

    for migration in MIGRATIONS {
        sqlx::query(migration).execute(pool).await?;
    }

    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://echocast.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!(url = database_url, "sqlite pool created");

    Ok(pool)
}
