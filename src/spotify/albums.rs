use reqwest::{Client, Response};

use crate::{
    config::Config,
    error::GrabError,
    types::{AlbumDetail, AlbumSummary, Paging, SearchResponse, SimplifiedTrack},
};

/// Searches the catalog for albums matching a free-text query.
///
/// Calls `GET /search` with `type=album`. Spotify ranks the results, so a
/// `limit` of 1 yields the best match only.
///
/// # Errors
///
/// Any non-success status is returned as `GrabError::Api` together with the
/// raw response body.
pub async fn search_albums(
    client: &Client,
    config: &Config,
    token: &str,
    query: &str,
    limit: u32,
) -> Result<Vec<AlbumSummary>, GrabError> {
    let api_url = format!("{uri}/search", uri = &config.api_url);
    let limit = limit.to_string();

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("q", query), ("type", "album"), ("limit", limit.as_str())])
        .send()
        .await?;

    let json = ensure_success(response)
        .await?
        .json::<SearchResponse>()
        .await?;

    Ok(json.albums.items)
}

/// Retrieves the full album including its complete track listing.
///
/// `GET /albums/{id}` embeds only the first page of tracks (50 items). When
/// the embedded page points to a `next` page, the remaining pages are
/// fetched and appended so the returned `tracks.items` holds every track and
/// `tracks.next` is `None`.
pub async fn get_album(
    client: &Client,
    config: &Config,
    token: &str,
    album_id: &str,
) -> Result<AlbumDetail, GrabError> {
    let api_url = format!("{uri}/albums/{id}", uri = &config.api_url, id = album_id);

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let mut album = ensure_success(response).await?.json::<AlbumDetail>().await?;

    while let Some(next_url) = album.tracks.next.take() {
        let response = client.get(&next_url).bearer_auth(token).send().await?;
        let page = ensure_success(response)
            .await?
            .json::<Paging<SimplifiedTrack>>()
            .await?;

        album.tracks.items.extend(page.items);
        album.tracks.next = page.next;
    }

    Ok(album)
}

async fn ensure_success(response: Response) -> Result<Response, GrabError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GrabError::Api { status, body })
}
