//! Track metadata slice
//!
//! Rows are normalized into `TrackDescriptor` here, at the storage boundary,
//! so nothing loosely shaped leaks into session logic.

use echocast_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

fn descriptor_from_row(row: &sqlx::sqlite::SqliteRow) -> TrackDescriptor {
    TrackDescriptor {
        id: row.get("id"),
        title: row.get("title"),
        media_url: row.get("media_url"),
        image_url: row.get("image_url"),
        author: row.get("author"),
        duration_seconds: row.get("duration_seconds"),
    }
}

/// Insert a track descriptor
pub async fn insert(pool: &SqlitePool, track: &TrackDescriptor) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO tracks (id, title, media_url, image_url, author, duration_seconds, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&track.id)
    .bind(&track.title)
    .bind(&track.media_url)
    .bind(&track.image_url)
    .bind(&track.author)
    .bind(track.duration_seconds)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await?;

    Ok(())
}

/// Get a track by ID
pub async fn get(pool: &SqlitePool, id: &TrackId) -> Result<Option<TrackDescriptor>> {
    let row = sqlx::query(
        "SELECT id, title, media_url, image_url, author, duration_seconds
         FROM tracks WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| descriptor_from_row(&row)))
}

/// Get all tracks, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<TrackDescriptor>> {
    let rows = sqlx::query(
        "SELECT id, title, media_url, image_url, author, duration_seconds
         FROM tracks ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(descriptor_from_row).collect())
}

/// Delete a track
pub async fn delete(pool: &SqlitePool, id: &TrackId) -> Result<()> {
    let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(echocast_core::CastError::TrackNotFound(id.clone()));
    }

    Ok(())
}
