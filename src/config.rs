//! Configuration management for spotgrab.
//!
//! Settings come from environment variables, optionally seeded from `.env`
//! files. They are read exactly once per process into a [`Config`] value
//! which is then handed to the Spotify client and the library writer. Nothing
//! reads the environment after that.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`spotgrab/.env`)
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{error::GrabError, management::Layout};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_LIBRARY_ROOT: &str = ".";

/// Loads environment variables from `.env` files.
///
/// The working directory is tried first, then the platform-specific local
/// data directory:
/// - Linux: `~/.local/share/spotgrab/.env`
/// - macOS: `~/Library/Application Support/spotgrab/.env`
/// - Windows: `%LOCALAPPDATA%/spotgrab/.env`
///
/// Missing files are skipped. Variables already present in the process
/// environment are never overwritten.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| e.to_string())?;
    }

    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotgrab/.env");
    path
}

/// Runtime configuration, loaded once per invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client ID (`SPOTIFY_API_AUTH_CLIENT_ID`).
    pub client_id: String,
    /// Spotify application client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET`).
    pub client_secret: String,
    /// Base URL of the Web API (`SPOTIFY_API_URL`).
    pub api_url: String,
    /// Token endpoint for the client-credentials exchange (`SPOTIFY_API_TOKEN_URL`).
    pub token_url: String,
    /// Directory the JSON library is written under (`SPOTGRAB_LIBRARY_ROOT`).
    pub library_root: PathBuf,
    /// On-disk layout of the library (`SPOTGRAB_LIBRARY_LAYOUT`).
    pub layout: Layout,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, GrabError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as missing. The client credentials also
    /// accept the bare `CLIENT_ID` / `CLIENT_SECRET` names used by older
    /// `.env` files.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GrabError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let client_id = get("SPOTIFY_API_AUTH_CLIENT_ID")
            .or_else(|| get("CLIENT_ID"))
            .ok_or_else(|| GrabError::Config("SPOTIFY_API_AUTH_CLIENT_ID must be set".into()))?;
        let client_secret = get("SPOTIFY_API_AUTH_CLIENT_SECRET")
            .or_else(|| get("CLIENT_SECRET"))
            .ok_or_else(|| {
                GrabError::Config("SPOTIFY_API_AUTH_CLIENT_SECRET must be set".into())
            })?;

        let layout = match get("SPOTGRAB_LIBRARY_LAYOUT") {
            Some(raw) => raw.parse::<Layout>().map_err(GrabError::Config)?,
            None => Layout::default(),
        };

        Ok(Config {
            client_id,
            client_secret,
            api_url: get("SPOTIFY_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            library_root: PathBuf::from(
                get("SPOTGRAB_LIBRARY_ROOT").unwrap_or_else(|| DEFAULT_LIBRARY_ROOT.to_string()),
            ),
            layout,
        })
    }
}
