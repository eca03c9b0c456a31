use crate::{
    spotify::{ApiError, SpotifyClient},
    types::{Artist, SearchArtistsResponse},
};

/// Searches Spotify's catalog for artists matching `query`.
///
/// Spotify ranks the results itself; the first item is its best match.
/// `limit` is clamped to the 1..=50 range the endpoint accepts.
///
/// # Example
///
/// ```ignore
/// let artists = search_artists(&client, "Eve", 1).await?;
/// if let Some(best) = artists.first() {
///     println!("{} -> {}", best.name, best.id);
/// }
/// ```
pub async fn search_artists(
    client: &SpotifyClient,
    query: &str,
    limit: u32,
) -> Result<Vec<Artist>, ApiError> {
    let limit = limit.clamp(1, 50).to_string();
    let api_url = client.endpoint(
        &["search"],
        &[("q", query), ("type", "artist"), ("limit", limit.as_str())],
    )?;

    let res = client.get_json::<SearchArtistsResponse>(&api_url).await?;
    Ok(res.artists.items)
}
