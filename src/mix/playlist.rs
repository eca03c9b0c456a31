use crate::{
    spotify::{ApiError, MAX_TRACKS_PER_REQUEST, SpotifyApi},
    types::PlaylistRef,
};

/// Creates a playlist called `name` for the current user and fills it with
/// `track_ids` in order.
///
/// Tracks are sent in consecutive chunks of [`MAX_TRACKS_PER_REQUEST`]. When
/// creation fails nothing else is sent. When an append fails the error is
/// returned and the playlist stays as far as it got; it is not deleted.
pub async fn build<C: SpotifyApi>(
    client: &C,
    name: &str,
    track_ids: &[String],
) -> Result<PlaylistRef, ApiError> {
    let user = client.current_user().await?;
    let playlist = client.create_playlist(&user.id, name).await?;

    for chunk in track_ids.chunks(MAX_TRACKS_PER_REQUEST) {
        client.add_tracks(&playlist.id, chunk).await?;
    }

    let url = playlist
        .external_urls
        .spotify
        .unwrap_or_else(|| format!("https://open.spotify.com/playlist/{}", playlist.id));

    Ok(PlaylistRef {
        id: playlist.id,
        name: playlist.name,
        url,
        track_count: track_ids.len(),
    })
}
