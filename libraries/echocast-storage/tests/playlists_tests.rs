//! Integration tests for the playlist slice
//!
//! Pins the membership semantics: ordered, duplicate-permitting JSON array,
//! remove-all-occurrences, and no cascading cleanup on delete.

mod test_helpers;

use echocast_core::types::PlaylistId;
use echocast_core::CastError;
use test_helpers::*;

#[tokio::test]
async fn create_and_get_round_trip() {
    let db = TestDb::new().await;
    let owner = test_user();

    let playlist = echocast_storage::playlists::create(db.pool(), &owner, "Morning Commute")
        .await
        .unwrap();

    let fetched = echocast_storage::playlists::get(db.pool(), &playlist.id)
        .await
        .unwrap()
        .expect("playlist should exist");

    assert_eq!(fetched.name, "Morning Commute");
    assert_eq!(fetched.owner_id, owner);
    assert!(fetched.track_ids.is_empty());
}

#[tokio::test]
async fn list_by_owner_is_scoped() {
    let db = TestDb::new().await;
    let alice = echocast_core::types::UserId::new("alice");
    let bob = echocast_core::types::UserId::new("bob");

    echocast_storage::playlists::create(db.pool(), &alice, "Hers")
        .await
        .unwrap();
    echocast_storage::playlists::create(db.pool(), &bob, "His")
        .await
        .unwrap();

    let theirs = echocast_storage::playlists::list_by_owner(db.pool(), &alice)
        .await
        .unwrap();
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].name, "Hers");
}

#[tokio::test]
async fn add_track_appends_in_order() {
    let db = TestDb::new().await;
    let owner = test_user();
    let first = insert_test_track(db.pool(), "t1", 100.0).await;
    let second = insert_test_track(db.pool(), "t2", 200.0).await;

    let playlist = echocast_storage::playlists::create(db.pool(), &owner, "Mix")
        .await
        .unwrap();
    echocast_storage::playlists::add_track(db.pool(), &playlist.id, &first.id)
        .await
        .unwrap();
    echocast_storage::playlists::add_track(db.pool(), &playlist.id, &second.id)
        .await
        .unwrap();

    let fetched = echocast_storage::playlists::get(db.pool(), &playlist.id)
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<&str> = fetched.track_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2"]);
}

#[tokio::test]
async fn duplicate_append_yields_two_occurrences() {
    let db = TestDb::new().await;
    let owner = test_user();
    let track = insert_test_track(db.pool(), "t1", 100.0).await;

    let playlist = echocast_storage::playlists::create(db.pool(), &owner, "Mix")
        .await
        .unwrap();
    echocast_storage::playlists::add_track(db.pool(), &playlist.id, &track.id)
        .await
        .unwrap();
    echocast_storage::playlists::add_track(db.pool(), &playlist.id, &track.id)
        .await
        .unwrap();

    let fetched = echocast_storage::playlists::get(db.pool(), &playlist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.track_ids.len(), 2);

    // Duplicate members resolve to duplicate descriptors
    let resolved = echocast_storage::playlists::tracks_in(db.pool(), &playlist.id)
        .await
        .unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].id, resolved[1].id);
}

#[tokio::test]
async fn remove_track_drops_every_occurrence() {
    let db = TestDb::new().await;
    let owner = test_user();
    let keep_a = insert_test_track(db.pool(), "a", 100.0).await;
    let target = insert_test_track(db.pool(), "t", 100.0).await;
    let keep_b = insert_test_track(db.pool(), "b", 100.0).await;

    let playlist = echocast_storage::playlists::create(db.pool(), &owner, "Mix")
        .await
        .unwrap();
    for id in [&keep_a.id, &target.id, &keep_b.id, &target.id] {
        echocast_storage::playlists::add_track(db.pool(), &playlist.id, id)
            .await
            .unwrap();
    }

    echocast_storage::playlists::remove_track(db.pool(), &playlist.id, &target.id)
        .await
        .unwrap();

    let fetched = echocast_storage::playlists::get(db.pool(), &playlist.id)
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<&str> = fetched.track_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[tokio::test]
async fn tracks_in_drops_unresolved_members() {
    let db = TestDb::new().await;
    let owner = test_user();
    let kept = insert_test_track(db.pool(), "kept", 100.0).await;
    let doomed = insert_test_track(db.pool(), "doomed", 100.0).await;

    let playlist = echocast_storage::playlists::create(db.pool(), &owner, "Mix")
        .await
        .unwrap();
    echocast_storage::playlists::add_track(db.pool(), &playlist.id, &kept.id)
        .await
        .unwrap();
    echocast_storage::playlists::add_track(db.pool(), &playlist.id, &doomed.id)
        .await
        .unwrap();

    echocast_storage::tracks::delete(db.pool(), &doomed.id)
        .await
        .unwrap();

    let resolved = echocast_storage::playlists::tracks_in(db.pool(), &playlist.id)
        .await
        .unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id.as_str(), "kept");

    // The membership array itself is untouched
    let fetched = echocast_storage::playlists::get(db.pool(), &playlist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.track_ids.len(), 2);
}

#[tokio::test]
async fn delete_leaves_other_collections_alone() {
    let db = TestDb::new().await;
    let owner = test_user();
    let track = insert_test_track(db.pool(), "t1", 100.0).await;

    let playlist = echocast_storage::playlists::create(db.pool(), &owner, "Mix")
        .await
        .unwrap();
    echocast_storage::playlists::add_track(db.pool(), &playlist.id, &track.id)
        .await
        .unwrap();
    echocast_storage::queue::enqueue(db.pool(), &owner, &track.id)
        .await
        .unwrap();

    echocast_storage::playlists::delete(db.pool(), &playlist.id)
        .await
        .unwrap();

    let fetched = echocast_storage::playlists::get(db.pool(), &playlist.id)
        .await
        .unwrap();
    assert!(fetched.is_none());

    // Queue entries for the same tracks survive
    let queued = echocast_storage::queue::list(db.pool(), &owner).await.unwrap();
    assert_eq!(queued.len(), 1);

    // The track itself survives
    let still_there = echocast_storage::tracks::get(db.pool(), &track.id)
        .await
        .unwrap();
    assert!(still_there.is_some());
}

#[tokio::test]
async fn operations_on_missing_playlists_error() {
    let db = TestDb::new().await;
    let track = insert_test_track(db.pool(), "t1", 100.0).await;
    let missing = PlaylistId::new("nope");

    let add = echocast_storage::playlists::add_track(db.pool(), &missing, &track.id).await;
    assert!(matches!(add, Err(CastError::PlaylistNotFound(_))));

    let delete = echocast_storage::playlists::delete(db.pool(), &missing).await;
    assert!(matches!(delete, Err(CastError::PlaylistNotFound(_))));
}
