use reqwest::StatusCode;

use crate::{
    spotify::{ApiError, PAGE_LIMIT, SpotifyClient},
    types::{Album, Track},
    utils::ReleaseKinds,
};

/// Retrieves every release of an artist in the given release groups.
///
/// Uses `/artists/{id}/albums` with `include_groups` set from `release_types`
/// and follows the paging links until the listing is exhausted. Releases are
/// returned in the order Spotify lists them.
///
/// # Unknown artists
///
/// Spotify answers a malformed or unknown artist ID with 400 or 404. Both are
/// mapped to an empty listing so that a bad ID behaves like an artist without
/// releases. Any other failure is propagated.
pub async fn get_artist_albums(
    client: &SpotifyClient,
    artist_id: &str,
    release_types: &ReleaseKinds,
) -> Result<Vec<Album>, ApiError> {
    let include_groups = release_types.to_string();
    let limit = PAGE_LIMIT.to_string();
    let api_url = client.endpoint(
        &["artists", artist_id, "albums"],
        &[("include_groups", include_groups.as_str()), ("limit", limit.as_str())],
    )?;

    match client.get_all_pages::<Album>(api_url).await {
        Err(e) if matches!(e.status(), Some(StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND)) => {
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Retrieves the full track listing of an album, following pagination for
/// albums with more than [`PAGE_LIMIT`] tracks.
pub async fn get_album_tracks(
    client: &SpotifyClient,
    album_id: &str,
) -> Result<Vec<Track>, ApiError> {
    let limit = PAGE_LIMIT.to_string();
    let api_url =
        client.endpoint(&["albums", album_id, "tracks"], &[("limit", limit.as_str())])?;

    client.get_all_pages::<Track>(api_url).await
}
