use std::path::PathBuf;

use serde_json::{Value, json};
use spotgrab::error::GrabError;
use spotgrab::management::*;
use spotgrab::types::{AlbumRecord, ArtistRecord, TrackRecord};
use tempfile::TempDir;

fn sample_album() -> AlbumRecord {
    AlbumRecord {
        title: "OK Computer".to_string(),
        artist: "Radiohead".to_string(),
        release_year: "1997-05-21".to_string(),
        genres: vec![],
        tracklist: vec!["t1".to_string(), "t2".to_string()],
        id: Some("abc".to_string()),
    }
}

#[test]
fn test_layout_paths_artists() {
    let library = Library::new("/lib", Layout::Artists);

    assert_eq!(
        library.album_path("radiohead", "ok-computer"),
        PathBuf::from("/lib/artists/radiohead/ok-computer.json")
    );
    assert_eq!(
        library.track_path("radiohead", "ok-computer", "airbag"),
        PathBuf::from("/lib/artists/radiohead/ok-computer/airbag.json")
    );
    assert_eq!(
        library.artist_path("radiohead"),
        PathBuf::from("/lib/artists/radiohead/metadata.json")
    );
}

#[test]
fn test_layout_paths_music() {
    let library = Library::new("/lib", Layout::Music);

    assert_eq!(
        library.album_path("radiohead", "ok-computer"),
        PathBuf::from("/lib/music/artists/radiohead/ok-computer/metadata.json")
    );
    assert_eq!(
        library.track_path("radiohead", "ok-computer", "airbag"),
        PathBuf::from("/lib/music/artists/radiohead/ok-computer/airbag.json")
    );
    assert_eq!(
        library.artist_path("radiohead"),
        PathBuf::from("/lib/music/artists/radiohead/metadata.json")
    );
}

#[test]
fn test_layout_parse() {
    assert_eq!("artists".parse::<Layout>().unwrap(), Layout::Artists);
    assert_eq!(" Music ".parse::<Layout>().unwrap(), Layout::Music);
    assert_eq!(Layout::default(), Layout::Artists);
    assert_eq!(Layout::Music.to_string(), "music");

    let err = "flat".parse::<Layout>().unwrap_err();
    assert!(err.contains("invalid layout 'flat'"));
}

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("artists/radiohead/ok-computer.json");
    let album = sample_album();

    write_metadata(&path, &album).await.unwrap();
    let read: AlbumRecord = read_metadata(&path).await.unwrap().unwrap();

    assert_eq!(read, album);
}

#[tokio::test]
async fn test_write_creates_parents_and_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a/b/c/track.json");

    let first = TrackRecord {
        title: "Airbag".to_string(),
        artist: "Radiohead".to_string(),
        album: "OK Computer".to_string(),
        duration_ms: 284_000,
        id: Some("t1".to_string()),
    };
    write_metadata(&path, &first).await.unwrap();

    let second = TrackRecord {
        duration_ms: 1,
        id: None,
        ..first.clone()
    };
    write_metadata(&path, &second).await.unwrap();

    let read: TrackRecord = read_metadata(&path).await.unwrap().unwrap();
    assert_eq!(read, second);

    // A missing id is omitted rather than written as null
    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.get("id").is_none());
}

#[tokio::test]
async fn test_write_uses_four_space_indent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("album.json");

    write_metadata(&path, &sample_album()).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("{\n    \"title\": \"OK Computer\""));
}

#[tokio::test]
async fn test_write_fails_when_parent_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("artists");
    std::fs::write(&blocker, "not a directory").unwrap();

    let result = write_metadata(&blocker.join("radiohead/metadata.json"), &sample_album()).await;

    match result {
        Err(GrabError::Filesystem { path, .. }) => assert_eq!(path, blocker.join("radiohead")),
        other => panic!("expected filesystem error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_read_missing_file_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let read: Option<AlbumRecord> = read_metadata(&temp_dir.path().join("nope.json"))
        .await
        .unwrap();
    assert!(read.is_none());
}

#[tokio::test]
async fn test_merge_album_fresh_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("artists/a/metadata.json");

    let record = merge_album(path.clone(), "A", None, "X").await.unwrap();

    assert_eq!(record.name, "A");
    assert_eq!(record.albums, vec!["X"]);

    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, json!({"name": "A", "albums": ["X"]}));
}

#[tokio::test]
async fn test_merge_album_duplicate_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metadata.json");

    merge_album(path.clone(), "A", None, "X").await.unwrap();
    let record = merge_album(path.clone(), "A", None, "X").await.unwrap();

    assert_eq!(record.albums, vec!["X"]);
}

#[tokio::test]
async fn test_merge_album_appends_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metadata.json");

    merge_album(path.clone(), "A", None, "X").await.unwrap();
    merge_album(path.clone(), "A", None, "Y").await.unwrap();
    let record: ArtistRecord = read_metadata(&path).await.unwrap().unwrap();

    assert_eq!(record.name, "A");
    assert_eq!(record.albums, vec!["X", "Y"]);
}

#[tokio::test]
async fn test_merge_album_keeps_existing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metadata.json");
    std::fs::write(
        &path,
        r#"{"name": "Radiohead", "albums": ["Kid A"], "id": "r1", "notes": {"fav": true}}"#,
    )
    .unwrap();

    // Name and id from the existing file win over the candidate values
    merge_album(path.clone(), "radiohead", Some("other".to_string()), "Amnesiac")
        .await
        .unwrap();

    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        json!({
            "name": "Radiohead",
            "albums": ["Kid A", "Amnesiac"],
            "id": "r1",
            "notes": {"fav": true}
        })
    );
}

#[tokio::test]
async fn test_merge_album_malformed_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metadata.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = merge_album(path.clone(), "A", None, "X").await;
    assert!(matches!(result, Err(GrabError::Json(_))));

    // Wrong shape is just as fatal
    std::fs::write(&path, r#"{"name": "A", "albums": "X"}"#).unwrap();
    let result = merge_album(path.clone(), "A", None, "X").await;
    assert!(matches!(result, Err(GrabError::Json(_))));

    // The broken file is left untouched
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        r#"{"name": "A", "albums": "X"}"#
    );
}

#[tokio::test]
async fn test_artist_manager_add_album_reports_change() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = ArtistMetadataManager::load_or_new(
        temp_dir.path().join("metadata.json"),
        "A",
        Some("a1".to_string()),
    )
    .await
    .unwrap();

    assert!(manager.add_album("X"));
    assert!(!manager.add_album("X"));
    assert!(manager.add_album("Y"));
    assert_eq!(manager.record().albums, vec!["X", "Y"]);
    assert_eq!(manager.record().id.as_deref(), Some("a1"));

    // Nothing hits the disk until persist
    assert!(!manager.path().exists());
    manager.persist().await.unwrap();
    assert!(manager.path().is_file());
}

#[test]
fn test_metadata_slug_collisions() {
    let artists = Library::new("/lib", Layout::Artists);
    assert!(artists.album_collides("metadata"));
    assert!(!artists.album_collides("metadata-remastered"));
    assert!(!artists.track_collides("metadata"));

    let music = Library::new("/lib", Layout::Music);
    assert!(music.track_collides("metadata"));
    assert!(!music.album_collides("metadata"));
    assert_eq!(
        music.track_path("a", "b", "metadata"),
        music.album_path("a", "b")
    );
}
