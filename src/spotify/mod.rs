//! # Spotify Integration Module
//!
//! This module is the boundary between spotgrab and the Spotify Web API. The
//! rest of the crate only sees the [`Catalog`] trait; [`SpotifyClient`] is
//! the production implementation.
//!
//! ## Architecture
//!
//! ```text
//! Importer (search → fetch → persist)
//!          ↓
//! Catalog trait
//!          ↓
//! SpotifyClient
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     └── Albums (search, album detail with track paging)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] performs the client-credentials exchange against the token
//! endpoint. The resulting token is cached in memory by the client and
//! reused for every call of the process; it is only requested again when it
//! is about to expire. Nothing is written to disk.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /search?type=album` - album search by free text
//! - `GET /albums/{id}` - album detail with nested artists, genres and tracks
//!
//! ## Error Handling
//!
//! Every non-success HTTP status becomes a [`GrabError`] carrying the status
//! and raw body. There are no retries; the caller decides what a failure
//! means, which for the CLI is always fatal.

pub mod albums;
pub mod auth;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::GrabError,
    types::{AlbumDetail, AlbumSummary, Token},
};

/// Read access to the album catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Albums matching `query`, best match first.
    async fn search_albums(&self, query: &str, limit: u32)
    -> Result<Vec<AlbumSummary>, GrabError>;

    /// Full album detail for `id`.
    async fn get_album(&self, id: &str) -> Result<AlbumDetail, GrabError>;
}

pub struct SpotifyClient {
    client: Client,
    config: Config,
    token: Mutex<Option<Token>>,
}

impl SpotifyClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
            token: Mutex::new(None),
        }
    }

    async fn access_token(&self) -> Result<String, GrabError> {
        let mut lock = self.token.lock().await;
        if let Some(token) = lock.as_ref() {
            if !auth::is_expired(token) {
                return Ok(token.access_token.clone());
            }
        }

        let token = auth::request_token(&self.client, &self.config).await?;
        let access_token = token.access_token.clone();
        *lock = Some(token);
        Ok(access_token)
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn search_albums(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<AlbumSummary>, GrabError> {
        let token = self.access_token().await?;
        albums::search_albums(&self.client, &self.config, &token, query, limit).await
    }

    async fn get_album(&self, id: &str) -> Result<AlbumDetail, GrabError> {
        let token = self.access_token().await?;
        albums::get_album(&self.client, &self.config, &token, id).await
    }
}
