use crate::{
    spotify::{ApiError, SpotifyApi},
    utils::ReleaseKinds,
};

/// Collects the track IDs of every album and single of an artist.
///
/// Albums are walked in the order Spotify lists them and tracks in album
/// order, so the result is deterministic for a given catalog. The same track
/// can show up more than once (re-releases, singles taken from an album).
///
/// Releases outside albums and singles are skipped even if the API hands
/// them out, which keeps compilation tracks by other artists away. Tracks
/// without an ID (local files) are skipped as well.
///
/// An empty or unknown artist ID gives an empty sequence.
pub async fn collect<C: SpotifyApi>(client: &C, artist_id: &str) -> Result<Vec<String>, ApiError> {
    if artist_id.is_empty() {
        return Ok(Vec::new());
    }

    let kinds = ReleaseKinds::discography();
    let albums = client.artist_albums(artist_id, &kinds).await?;

    let mut track_ids = Vec::new();
    for album in albums
        .iter()
        .filter(|album| kinds.includes_group(album.release_group()))
    {
        let tracks = client.album_tracks(&album.id).await?;
        track_ids.extend(tracks.into_iter().filter_map(|track| track.id));
    }

    Ok(track_ids)
}
