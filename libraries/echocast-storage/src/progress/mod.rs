//! Listening progress slice
//!
//! One row per (user, track), last write wins by `updated_at`. The
//! continue-listening query lives here too: it joins progress against track
//! metadata, drops rows whose track no longer resolves, and filters out
//! anything at or past the completion cutoff.

use echocast_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

/// Insert or replace the progress row for (user, track)
pub async fn upsert(
    pool: &SqlitePool,
    user_id: &UserId,
    track_id: &TrackId,
    position_seconds: f64,
    updated_at: i64,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO listening_progress (user_id, track_id, position_seconds, updated_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(user_id, track_id)
        DO UPDATE SET
            position_seconds = excluded.position_seconds,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(user_id)
    .bind(track_id)
    .bind(position_seconds)
    .bind(updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Most recently updated progress rows for a user, newest first
pub async fn list(pool: &SqlitePool, user_id: &UserId, limit: u32) -> Result<Vec<ProgressEntry>> {
    let rows = sqlx::query(
        "SELECT user_id, track_id, position_seconds, updated_at
         FROM listening_progress
         WHERE user_id = ?
         ORDER BY updated_at DESC
         LIMIT ?",
    )
    .bind(user_id)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ProgressEntry {
            user_id: row.get("user_id"),
            track_id: row.get("track_id"),
            position_seconds: row.get("position_seconds"),
            updated_at: row.get("updated_at"),
        })
        .collect())
}

/// Resumable tracks for a user: started but not finished
///
/// Reads up to `limit` most-recent progress rows, resolves each to its
/// descriptor (unresolved tracks are dropped by the join), and keeps those
/// below the completion cutoff. Order is descending `updated_at`.
pub async fn continue_listening(
    pool: &SqlitePool,
    user_id: &UserId,
    limit: u32,
) -> Result<Vec<TrackDescriptor>> {
    // The limit counts progress rows, not resolved tracks: take the
    // most-recent rows first, then let the join drop unresolved ones
    let rows = sqlx::query(
        r#"
        SELECT
            t.id, t.title, t.media_url, t.image_url, t.author, t.duration_seconds,
            lp.position_seconds
        FROM (
            SELECT track_id, position_seconds, updated_at
            FROM listening_progress
            WHERE user_id = ?
            ORDER BY updated_at DESC
            LIMIT ?
        ) lp
        INNER JOIN tracks t ON lp.track_id = t.id
        ORDER BY lp.updated_at DESC
        "#,
    )
    .bind(user_id)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let track = TrackDescriptor {
                id: row.get("id"),
                title: row.get("title"),
                media_url: row.get("media_url"),
                image_url: row.get("image_url"),
                author: row.get("author"),
                duration_seconds: row.get("duration_seconds"),
            };
            let position: f64 = row.get("position_seconds");
            (position < track.completion_cutoff()).then_some(track)
        })
        .collect())
}
