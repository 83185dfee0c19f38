//! Playlists slice
//!
//! Membership lives in a JSON array column, ordered and duplicate-permitting:
//! `add_track` appends without deduplicating (callers pre-filter against
//! current membership if they want set semantics). Deleting a playlist
//! removes the playlist row only; queue entries are a separate collection
//! and are never touched from here.

use echocast_core::{error::Result, types::*, CastError};
use sqlx::{Row, SqlitePool};

fn playlist_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Playlist> {
    let track_ids: Vec<TrackId> = serde_json::from_str(&row.get::<String, _>("track_ids"))?;

    Ok(Playlist {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        name: row.get("name"),
        track_ids,
        created_at: row.get("created_at"),
    })
}

async fn patch_track_ids(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    track_ids: &[TrackId],
) -> Result<()> {
    sqlx::query("UPDATE playlists SET track_ids = ? WHERE id = ?")
        .bind(serde_json::to_string(track_ids)?)
        .bind(playlist_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Create a new empty playlist
pub async fn create(pool: &SqlitePool, owner_id: &UserId, name: &str) -> Result<Playlist> {
    let playlist = Playlist::new(owner_id.clone(), name, chrono::Utc::now().timestamp());

    sqlx::query(
        "INSERT INTO playlists (id, owner_id, name, track_ids, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&playlist.id)
    .bind(&playlist.owner_id)
    .bind(&playlist.name)
    .bind(serde_json::to_string(&playlist.track_ids)?)
    .bind(playlist.created_at)
    .execute(pool)
    .await?;

    Ok(playlist)
}

/// Get a playlist by ID
pub async fn get(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        "SELECT id, owner_id, name, track_ids, created_at FROM playlists WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| playlist_from_row(&row)).transpose()
}

/// All playlists owned by a user, newest first
pub async fn list_by_owner(pool: &SqlitePool, owner_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        "SELECT id, owner_id, name, track_ids, created_at
         FROM playlists WHERE owner_id = ?
         ORDER BY created_at DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(playlist_from_row).collect()
}

/// Append a track to a playlist's membership
///
/// Does not deduplicate: appending a track already in the playlist yields a
/// second occurrence. This matches the reference behavior and is pinned by
/// tests; callers wanting set semantics check `Playlist::contains` first.
pub async fn add_track(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    track_id: &TrackId,
) -> Result<()> {
    let mut playlist = get(pool, playlist_id)
        .await?
        .ok_or_else(|| CastError::PlaylistNotFound(playlist_id.clone()))?;

    playlist.track_ids.push(track_id.clone());
    patch_track_ids(pool, playlist_id, &playlist.track_ids).await
}

/// Remove every occurrence of a track from a playlist's membership
pub async fn remove_track(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    track_id: &TrackId,
) -> Result<()> {
    let mut playlist = get(pool, playlist_id)
        .await?
        .ok_or_else(|| CastError::PlaylistNotFound(playlist_id.clone()))?;

    playlist.track_ids.retain(|id| id != track_id);
    patch_track_ids(pool, playlist_id, &playlist.track_ids).await
}

/// Delete a playlist
///
/// Removes the playlist row only. No cascading cleanup of other collections:
/// queue entries referencing the same tracks are left alone.
pub async fn delete(pool: &SqlitePool, id: &PlaylistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CastError::PlaylistNotFound(id.clone()));
    }

    Ok(())
}

/// Member tracks resolved to descriptors, in playlist order
///
/// IDs that no longer resolve are dropped; duplicate members resolve to
/// duplicate descriptors.
pub async fn tracks_in(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<Vec<TrackDescriptor>> {
    let playlist = get(pool, playlist_id)
        .await?
        .ok_or_else(|| CastError::PlaylistNotFound(playlist_id.clone()))?;

    let mut tracks = Vec::with_capacity(playlist.track_ids.len());
    for track_id in &playlist.track_ids {
        if let Some(track) = crate::tracks::get(pool, track_id).await? {
            tracks.push(track);
        }
    }

    Ok(tracks)
}
