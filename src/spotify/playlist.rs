use crate::{
    spotify::{ApiError, MAX_TRACKS_PER_REQUEST, SpotifyClient},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser,
    },
    utils,
};

/// Returns the user the access token belongs to.
pub async fn current_user(client: &SpotifyClient) -> Result<CurrentUser, ApiError> {
    let api_url = client.endpoint(&["me"], &[])?;
    client.get_json::<CurrentUser>(&api_url).await
}

/// Creates an empty playlist for `user_id`.
///
/// Only the name is sent, so Spotify applies its default visibility.
pub async fn create(
    client: &SpotifyClient,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, ApiError> {
    let api_url = client.endpoint(&["users", user_id, "playlists"], &[])?;
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: None,
    };

    let response = client
        .execute(false, |http, token| {
            http.post(&api_url).bearer_auth(token).json(&body)
        })
        .await?;

    Ok(response.json::<CreatePlaylistResponse>().await?)
}

/// Appends tracks to the end of a playlist and returns the new snapshot ID.
///
/// Spotify rejects more than [`MAX_TRACKS_PER_REQUEST`] items per call, so a
/// larger slice is refused before anything is sent.
pub async fn add_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<String, ApiError> {
    if track_ids.len() > MAX_TRACKS_PER_REQUEST {
        return Err(ApiError::Unexpected(format!(
            "cannot add {} tracks in one request, the limit is {}",
            track_ids.len(),
            MAX_TRACKS_PER_REQUEST
        )));
    }

    let api_url = client.endpoint(&["playlists", playlist_id, "tracks"], &[])?;
    let body = AddTrackToPlaylistRequest {
        uris: track_ids.iter().map(|id| utils::track_uri(id)).collect(),
    };

    let response = client
        .execute(false, |http, token| {
            http.post(&api_url).bearer_auth(token).json(&body)
        })
        .await?;

    let json = response.json::<AddTrackToPlaylistResponse>().await?;
    Ok(json.snapshot_id)
}
