use chrono::Utc;
use reqwest::Client;

use crate::{config::Config, error::GrabError, types::Token};

/// Seconds before the real expiry at which a token is treated as stale.
const EXPIRY_MARGIN_SECS: u64 = 60;

/// Exchanges the application credentials for an access token.
///
/// Uses the OAuth 2.0 client-credentials grant: the client ID and secret go
/// in a basic `Authorization` header and no user interaction is involved.
/// Tokens obtained this way can read the public catalog (search, albums)
/// but nothing user-specific.
///
/// # Errors
///
/// - `GrabError::Authentication` when Spotify rejects the credentials; the
///   response body is kept for the operator
/// - `GrabError::Request` on network failures or an unreadable response
pub async fn request_token(client: &Client, config: &Config) -> Result<Token, GrabError> {
    let response = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GrabError::Authentication { status, body });
    }

    let mut token = response.json::<Token>().await?;
    token.obtained_at = Utc::now().timestamp() as u64;
    Ok(token)
}

pub fn is_expired(token: &Token) -> bool {
    let now = Utc::now().timestamp() as u64;
    now + EXPIRY_MARGIN_SECS >= token.obtained_at + token.expires_in
}
