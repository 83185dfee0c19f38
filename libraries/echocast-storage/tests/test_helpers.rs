//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using real `SQLite` files (not
//! in-memory) to match production behavior and properly test migrations,
//! constraints, and indexes.

use echocast_core::types::{TrackDescriptor, TrackId, UserId};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = echocast_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        echocast_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Fixture: insert a track with a fixed id and duration
pub async fn insert_test_track(pool: &SqlitePool, id: &str, duration_seconds: f64) -> TrackDescriptor {
    let mut track = TrackDescriptor::new(
        format!("Episode {id}"),
        format!("https://cdn.example/{id}.mp3"),
        duration_seconds,
    );
    track.id = TrackId::new(id);
    track.author = "Test Author".to_string();

    echocast_storage::tracks::insert(pool, &track)
        .await
        .expect("Failed to insert test track");

    track
}

pub fn test_user() -> UserId {
    UserId::new("listener-1")
}
