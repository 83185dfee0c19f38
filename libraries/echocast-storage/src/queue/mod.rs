//! Ad-hoc queue slice
//!
//! A deduplicated membership set per user. There is no dequeue operation:
//! the reference behavior never removes entries, and none is invented here.

use echocast_core::{error::Result, types::*, CastError};
use sqlx::{Row, SqlitePool};

/// Add a track to the user's queue
///
/// Fails with `AlreadyQueued` if a row for (user, track) already exists.
pub async fn enqueue(pool: &SqlitePool, user_id: &UserId, track_id: &TrackId) -> Result<()> {
    let existing = sqlx::query(
        "SELECT 1 FROM queue_entries WHERE user_id = ? AND track_id = ?",
    )
    .bind(user_id)
    .bind(track_id)
    .fetch_optional(pool)
    .await?;

    if existing.is_some() {
        return Err(CastError::AlreadyQueued(track_id.clone()));
    }

    let result = sqlx::query(
        "INSERT INTO queue_entries (user_id, track_id, added_at) VALUES (?, ?, ?)",
    )
    .bind(user_id)
    .bind(track_id)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        // Concurrent insert between the check and the write: the primary key
        // backstop degrades to the same error
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Err(CastError::AlreadyQueued(track_id.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Raw queue rows for a user, oldest first
pub async fn list_entries(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<QueueEntry>> {
    let rows = sqlx::query(
        "SELECT user_id, track_id, added_at
         FROM queue_entries WHERE user_id = ?
         ORDER BY added_at, rowid",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| QueueEntry {
            user_id: row.get("user_id"),
            track_id: row.get("track_id"),
            added_at: row.get("added_at"),
        })
        .collect())
}

/// Queued tracks resolved to descriptors, oldest first
///
/// Entries whose track no longer resolves are dropped.
pub async fn list(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<TrackDescriptor>> {
    let rows = sqlx::query(
        r#"
        SELECT t.id, t.title, t.media_url, t.image_url, t.author, t.duration_seconds
        FROM queue_entries q
        INNER JOIN tracks t ON q.track_id = t.id
        WHERE q.user_id = ?
        ORDER BY q.added_at, q.rowid
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| TrackDescriptor {
            id: row.get("id"),
            title: row.get("title"),
            media_url: row.get("media_url"),
            image_url: row.get("image_url"),
            author: row.get("author"),
            duration_seconds: row.get("duration_seconds"),
        })
        .collect())
}
