use std::path::{Path, PathBuf};

use serde_json::Map;

use crate::{
    error::GrabError,
    management::metadata::{read_metadata, write_metadata},
    types::ArtistRecord,
};

pub struct ArtistMetadataManager {
    path: PathBuf,
    record: ArtistRecord,
}

impl ArtistMetadataManager {
    pub fn new(path: PathBuf, name: &str, id: Option<String>) -> Self {
        Self {
            path,
            record: ArtistRecord {
                name: name.to_string(),
                albums: Vec::new(),
                id,
                extra: Map::new(),
            },
        }
    }

    /// Loads the artist file at `path`, or starts a fresh record if it does
    /// not exist yet. An existing file that doesn't parse is an error.
    pub async fn load_or_new(
        path: PathBuf,
        name: &str,
        id: Option<String>,
    ) -> Result<Self, GrabError> {
        match read_metadata::<ArtistRecord>(&path).await? {
            Some(record) => Ok(Self { path, record }),
            None => Ok(Self::new(path, name, id)),
        }
    }

    /// Appends `title` unless the artist already lists it.
    pub fn add_album(&mut self, title: &str) -> bool {
        if self.record.albums.iter().any(|a| a == title) {
            return false;
        }
        self.record.albums.push(title.to_string());
        true
    }

    pub async fn persist(&self) -> Result<(), GrabError> {
        write_metadata(&self.path, &self.record).await
    }

    pub fn record(&self) -> &ArtistRecord {
        &self.record
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Records `album_title` in the artist file at `path`.
///
/// The file is rewritten even when the album was already listed.
pub async fn merge_album(
    path: PathBuf,
    name: &str,
    id: Option<String>,
    album_title: &str,
) -> Result<ArtistRecord, GrabError> {
    let mut manager = ArtistMetadataManager::load_or_new(path, name, id).await?;
    manager.add_album(album_title);
    manager.persist().await?;
    Ok(manager.record().clone())
}
