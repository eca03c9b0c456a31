use crate::spotify::{ApiError, SpotifyApi};

/// Looks `query` up and returns the ID of Spotify's top ranked artist.
///
/// The first search result is taken as authoritative; its name is not
/// compared with the query. `Ok(None)` means nothing matched. An empty query
/// is answered with `None` without asking Spotify.
pub async fn resolve<C: SpotifyApi>(client: &C, query: &str) -> Result<Option<String>, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(None);
    }

    let artists = client.search_artists(query, 1).await?;
    Ok(artists.into_iter().next().map(|artist| artist.id))
}
