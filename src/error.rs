use std::{fmt, io, path::PathBuf};

use reqwest::StatusCode;

/// Every way a `grab` run can fail.
///
/// None of these are recovered locally; the CLI prints the error and exits.
/// Files written before the failure stay on disk.
#[derive(Debug)]
pub enum GrabError {
    Config(String),
    Authentication { status: StatusCode, body: String },
    Api { status: StatusCode, body: String },
    EmptyResult { query: String },
    MissingArtist { album: String },
    Filesystem { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    Request(reqwest::Error),
}

impl GrabError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GrabError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GrabError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrabError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GrabError::Authentication { status, body } => {
                write!(f, "Failed to get access token ({}): {}", status, body)
            }
            GrabError::Api { status, body } => {
                write!(f, "Spotify API call failed ({}): {}", status, body)
            }
            GrabError::EmptyResult { query } => {
                write!(f, "No album found for query '{}'", query)
            }
            GrabError::MissingArtist { album } => {
                write!(f, "Album '{}' has no artists", album)
            }
            GrabError::Filesystem { path, source } => {
                write!(f, "Filesystem error at {}: {}", path.display(), source)
            }
            GrabError::Json(e) => write!(f, "JSON error: {}", e),
            GrabError::Request(e) => write!(f, "Request error: {}", e),
        }
    }
}

impl std::error::Error for GrabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrabError::Filesystem { source, .. } => Some(source),
            GrabError::Json(e) => Some(e),
            GrabError::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GrabError {
    fn from(err: serde_json::Error) -> Self {
        GrabError::Json(err)
    }
}

impl From<reqwest::Error> for GrabError {
    fn from(err: reqwest::Error) -> Self {
        GrabError::Request(err)
    }
}
