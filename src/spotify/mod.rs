//! # Spotify Integration Module
//!
//! This module is the integration layer between artistmix and the Spotify Web
//! API. It handles authentication, HTTP communication, pagination and the
//! small amount of retry logic Spotify's rate limiting calls for.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline (mix::*)
//!          ↓
//! SpotifyApi trait  ←  test fakes
//!          ↓
//! SpotifyClient
//!     ├── artists   (search)
//!     ├── albums    (artist discography, album tracks)
//!     └── playlist  (current user, create, add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! The pipeline never talks to `reqwest` directly. It is generic over
//! [`SpotifyApi`], which [`SpotifyClient`] implements against the real API and
//! which tests implement in memory.
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 PKCE flow. The resulting token is cached
//! by [`crate::management::TokenManager`] and refreshed transparently by
//! [`SpotifyClient`] before each request.
//!
//! ## Pagination
//!
//! Listing endpoints return paging objects whose `next` field holds the URL
//! of the following page. The client follows `next` until it is empty, with a
//! hard cap of [`MAX_PAGES`] pages per listing, so callers always receive the
//! complete listing.
//!
//! ## Error Handling
//!
//! - **502 Bad Gateway**: GET requests are retried up to [`MAX_RETRIES`]
//!   times with a 10 second pause
//! - **429 Too Many Requests**: the `Retry-After` header is honoured when it
//!   is at most 120 seconds, otherwise [`ApiError::RateLimited`] is returned
//! - **Everything else**: propagated as [`ApiError`]
//!
//! ## API Coverage
//!
//! - `GET /search?type=artist` - artist lookup by name
//! - `GET /artists/{id}/albums` - discography filtered by release group
//! - `GET /albums/{id}/tracks` - track listing of one album
//! - `GET /me` - the authorized user
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - append up to 100 tracks

pub mod albums;
pub mod artists;
pub mod auth;
mod client;
mod error;
pub mod playlist;

pub use client::SpotifyClient;
pub use error::ApiError;

use crate::{
    types::{Album, Artist, CreatePlaylistResponse, CurrentUser, Track},
    utils::ReleaseKinds,
};

/// Maximum number of items Spotify accepts in one "add items to playlist"
/// request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

/// Page size used for listing endpoints (Spotify's maximum for albums).
pub const PAGE_LIMIT: u32 = 50;

/// Upper bound of pages fetched for one listing.
pub const MAX_PAGES: usize = 200;

/// Retries for transient failures before the error is propagated.
pub const MAX_RETRIES: u32 = 3;

/// The Spotify capabilities the aggregation pipeline depends on.
///
/// Listing methods return complete listings, not single pages.
pub trait SpotifyApi: Send + Sync {
    /// Artists matching `query`, best match first.
    fn search_artists(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Artist>, ApiError>> + Send;

    /// Every release of the artist in one of `kinds`, in Spotify's order.
    ///
    /// An unknown artist ID yields an empty listing rather than an error.
    fn artist_albums(
        &self,
        artist_id: &str,
        kinds: &ReleaseKinds,
    ) -> impl Future<Output = Result<Vec<Album>, ApiError>> + Send;

    fn album_tracks(
        &self,
        album_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>, ApiError>> + Send;

    fn current_user(&self) -> impl Future<Output = Result<CurrentUser, ApiError>> + Send;

    /// Creates an empty playlist owned by `user_id` with the platform's
    /// default visibility.
    fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<CreatePlaylistResponse, ApiError>> + Send;

    /// Appends at most [`MAX_TRACKS_PER_REQUEST`] tracks and returns the new
    /// snapshot ID.
    fn add_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> impl Future<Output = Result<String, ApiError>> + Send;
}
