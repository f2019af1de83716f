use crate::{
    error::GrabError,
    management::{Library, merge_album, write_metadata},
    spotify::Catalog,
    success,
    types::{AlbumDetail, AlbumRecord, ImportReport, RecordKind, TrackRecord, WrittenFile},
    utils::slug_or,
    warning,
};

/// Looks up the best album match for `query` and writes it into `library`.
///
/// Search and fetch both complete before anything touches the disk, so a
/// failed lookup leaves the library as it was.
pub async fn grab<C>(catalog: &C, library: &Library, query: &str) -> Result<ImportReport, GrabError>
where
    C: Catalog + ?Sized,
{
    let album = lookup(catalog, query).await?;
    add_album(library, &album).await
}

/// Searches for `query` and fetches the full detail of the first hit.
pub async fn lookup<C>(catalog: &C, query: &str) -> Result<AlbumDetail, GrabError>
where
    C: Catalog + ?Sized,
{
    let results = catalog.search_albums(query, 1).await?;
    let Some(first) = results.into_iter().next() else {
        return Err(GrabError::EmptyResult {
            query: query.to_string(),
        });
    };

    catalog.get_album(&first.id).await
}

/// Writes the album file, one file per track, and merges the album into the
/// artist file. Only the first listed artist is credited.
pub async fn add_album(library: &Library, album: &AlbumDetail) -> Result<ImportReport, GrabError> {
    let Some(artist) = album.artists.first() else {
        return Err(GrabError::MissingArtist {
            album: album.name.clone(),
        });
    };

    let artist_slug = slug_or(&artist.name, &artist.id);
    let album_slug = slug_or(&album.name, &album.id);
    let mut report = ImportReport::default();

    let album_record = AlbumRecord {
        title: album.name.clone(),
        artist: artist.name.clone(),
        release_year: album.release_date.clone(),
        genres: album.genres.clone(),
        tracklist: album.tracks.items.iter().map(|t| t.id.clone()).collect(),
        id: Some(album.id.clone()),
    };
    let album_path = library.album_path(&artist_slug, &album_slug);
    if library.album_collides(&album_slug) {
        warning!(
            "Album \"{}\" shares its file with the artist metadata: {}",
            album.name,
            album_path.display()
        );
    }
    write_metadata(&album_path, &album_record).await?;
    success!("Added album metadata to: {}", album_path.display());
    report.files.push(WrittenFile {
        kind: RecordKind::Album,
        title: album.name.clone(),
        path: album_path,
    });

    for track in &album.tracks.items {
        let track_record = TrackRecord {
            title: track.name.clone(),
            artist: artist.name.clone(),
            album: album.name.clone(),
            duration_ms: track.duration_ms,
            id: Some(track.id.clone()),
        };
        let track_slug = slug_or(&track.name, &track.id);
        let track_path = library.track_path(&artist_slug, &album_slug, &track_slug);
        if library.track_collides(&track_slug) {
            warning!(
                "Track \"{}\" overwrites the album metadata: {}",
                track.name,
                track_path.display()
            );
        }
        write_metadata(&track_path, &track_record).await?;
        success!("Added song metadata to: {}", track_path.display());
        report.files.push(WrittenFile {
            kind: RecordKind::Track,
            title: track.name.clone(),
            path: track_path,
        });
    }

    let artist_path = library.artist_path(&artist_slug);
    merge_album(
        artist_path.clone(),
        &artist.name,
        Some(artist.id.clone()),
        &album.name,
    )
    .await?;
    success!("Added artist metadata to: {}", artist_path.display());
    report.files.push(WrittenFile {
        kind: RecordKind::Artist,
        title: artist.name.clone(),
        path: artist_path,
    });

    Ok(report)
}
