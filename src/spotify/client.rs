use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::{sync::Mutex, time::sleep};

use crate::{
    config,
    management::TokenManager,
    spotify::{self, ApiError, MAX_PAGES, MAX_RETRIES, SpotifyApi},
    types::{Album, Artist, CreatePlaylistResponse, CurrentUser, Paging, Track},
    utils::ReleaseKinds,
};

/// Longest `Retry-After` we are willing to sit through.
const MAX_RETRY_AFTER_SECS: u64 = 120;
const BAD_GATEWAY_PAUSE: Duration = Duration::from_secs(10);

/// Authenticated handle to the Spotify Web API.
///
/// Built once per run and passed by reference to everything that needs
/// Spotify. Holds a single connection pool and the token manager, which
/// refreshes the access token when it is close to expiry.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(tokens: TokenManager) -> Self {
        Self::with_api_url(tokens, config::spotify_apiurl())
    }

    pub fn with_api_url(tokens: TokenManager, api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            tokens: Mutex::new(tokens),
        }
    }

    /// Builds a client from the cached token written by `artistmix auth`.
    pub async fn from_cache() -> Result<Self, ApiError> {
        let tokens = TokenManager::load().await.map_err(ApiError::Auth)?;
        Ok(Self::new(tokens))
    }

    /// Absolute URL for the API path made of `segments`, with `params` as
    /// query string.
    ///
    /// Every segment is percent-encoded on its own, so an ID holding `?`, `#`
    /// or `/` stays inside its segment and Spotify rejects it as an invalid ID
    /// instead of the request landing on another endpoint.
    pub(crate) fn endpoint(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| ApiError::Unexpected(format!("invalid API URL {}: {}", self.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ApiError::Unexpected(format!("API URL {} has no path", self.api_url)))?
            .pop_if_empty()
            .extend(segments);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url.into())
    }

    async fn access_token(&self) -> String {
        self.tokens.lock().await.get_valid_token().await
    }

    /// Sends the request built by `build`, retrying transient failures.
    ///
    /// `idempotent` requests are retried on 502 as well; all requests are
    /// retried on 429 as long as `Retry-After` stays reasonable.
    pub(crate) async fn execute<F>(&self, idempotent: bool, build: F) -> Result<Response, ApiError>
    where
        F: Fn(&Client, &str) -> RequestBuilder,
    {
        let mut attempt = 0;

        loop {
            let token = self.access_token().await;
            let response = build(&self.http, &token).send().await?;

            match response.status() {
                StatusCode::BAD_GATEWAY if idempotent && attempt < MAX_RETRIES => {
                    attempt += 1;
                    sleep(BAD_GATEWAY_PAUSE).await;
                }
                StatusCode::TOO_MANY_REQUESTS if attempt < MAX_RETRIES => {
                    let retry_after = retry_after_secs(&response);
                    if retry_after > MAX_RETRY_AFTER_SECS {
                        return Err(ApiError::RateLimited(retry_after));
                    }
                    attempt += 1;
                    sleep(Duration::from_secs(retry_after.max(1))).await;
                }
                _ => return Ok(response.error_for_status()?),
            }
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned + Send>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .execute(true, |http, token| http.get(url).bearer_auth(token))
            .await?;
        Ok(response.json::<T>().await?)
    }

    /// Follows `next` links starting at `first_url` and concatenates the
    /// items of every page.
    pub(crate) async fn get_all_pages<T>(&self, first_url: String) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = Vec::new();
        let mut next_url = Some(first_url);
        let mut pages_fetched = 0;

        while let Some(url) = next_url {
            if pages_fetched >= MAX_PAGES {
                break;
            }

            let page: Paging<T> = self.get_json(&url).await?;
            items.extend(page.items);
            next_url = page.next;
            pages_fetched += 1;
        }

        Ok(items)
    }
}

fn retry_after_secs(response: &Response) -> u64 {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(1)
}

impl SpotifyApi for SpotifyClient {
    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>, ApiError> {
        spotify::artists::search_artists(self, query, limit).await
    }

    async fn artist_albums(
        &self,
        artist_id: &str,
        kinds: &ReleaseKinds,
    ) -> Result<Vec<Album>, ApiError> {
        spotify::albums::get_artist_albums(self, artist_id, kinds).await
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<Track>, ApiError> {
        spotify::albums::get_album_tracks(self, album_id).await
    }

    async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        spotify::playlist::current_user(self).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<CreatePlaylistResponse, ApiError> {
        spotify::playlist::create(self, user_id, name).await
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<String, ApiError> {
        spotify::playlist::add_tracks(self, playlist_id, track_ids).await
    }
}
