use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub albums: Paging<AlbumSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedTrack {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub id: String,
    pub name: String,
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub artists: Vec<SimplifiedArtist>,
    pub tracks: Paging<SimplifiedTrack>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub title: String,
    pub artist: String,
    pub release_year: String,
    pub genres: Vec<String>,
    pub tracklist: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Per-artist file listing every album title imported so far.
///
/// Keys other than `name`, `albums` and `id` are carried through `extra`
/// so hand edits survive a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub name: String,
    pub albums: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Album,
    Track,
    Artist,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RecordKind::Album => "album",
            RecordKind::Track => "track",
            RecordKind::Artist => "artist",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFile {
    pub kind: RecordKind,
    pub title: String,
    pub path: std::path::PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub files: Vec<WrittenFile>,
}

impl ImportReport {
    pub fn count(&self, kind: RecordKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }
}

#[derive(Tabled)]
pub struct WrittenFileTableRow {
    pub kind: String,
    pub title: String,
    pub path: String,
}
