#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use artistmix::{
    spotify::{ApiError, SpotifyApi},
    types::{Album, Artist, CreatePlaylistResponse, CurrentUser, ExternalUrls, Track},
    utils::ReleaseKinds,
};

/// A Spotify call as seen by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search(String),
    ArtistAlbums(String, String),
    AlbumTracks(String),
    CurrentUser,
    CreatePlaylist(String, String),
    AddTracks(String, Vec<String>),
}

/// In-memory Spotify catalog that records every call made against it.
#[derive(Default)]
pub struct FakeSpotify {
    artists: Vec<Artist>,
    albums: HashMap<String, Vec<Album>>,
    tracks: HashMap<String, Vec<Track>>,
    pub fail_search: bool,
    pub fail_create: bool,
    pub fail_add_after: Option<usize>,
    calls: Mutex<Vec<Call>>,
}

impl FakeSpotify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artist(mut self, id: &str, name: &str) -> Self {
        self.artists.push(Artist {
            id: id.to_string(),
            name: name.to_string(),
            genres: Vec::new(),
        });
        self.albums.entry(id.to_string()).or_default();
        self
    }

    pub fn with_album(mut self, artist_id: &str, album_id: &str, group: &str, tracks: &[&str]) -> Self {
        self.albums
            .entry(artist_id.to_string())
            .or_default()
            .push(album(album_id, group));
        self.tracks.insert(
            album_id.to_string(),
            tracks.iter().map(|id| track(id)).collect(),
        );
        self
    }

    pub fn with_album_tracks(mut self, album_id: &str, tracks: Vec<Track>) -> Self {
        self.tracks.insert(album_id.to_string(), tracks);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added_chunks(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AddTracks(_, ids) => Some(ids),
                _ => None,
            })
            .collect()
    }

    pub fn searches(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(q) => Some(q),
                _ => None,
            })
            .collect()
    }

    pub fn created_playlists(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreatePlaylist(_, name) => Some(name),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn album(id: &str, group: &str) -> Album {
    Album {
        id: id.to_string(),
        name: format!("Album {}", id),
        album_type: if group == "single" { "single" } else { "album" }.to_string(),
        album_group: Some(group.to_string()),
        release_date: "2024-01-01".to_string(),
    }
}

pub fn track(id: &str) -> Track {
    Track {
        id: Some(id.to_string()),
        name: format!("Track {}", id),
    }
}

pub fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

impl SpotifyApi for FakeSpotify {
    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>, ApiError> {
        self.record(Call::Search(query.to_string()));
        if self.fail_search {
            return Err(ApiError::Unexpected("search unavailable".to_string()));
        }

        let needle = query.to_lowercase();
        Ok(self
            .artists
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn artist_albums(
        &self,
        artist_id: &str,
        kinds: &ReleaseKinds,
    ) -> Result<Vec<Album>, ApiError> {
        self.record(Call::ArtistAlbums(artist_id.to_string(), kinds.to_string()));
        Ok(self.albums.get(artist_id).cloned().unwrap_or_default())
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<Track>, ApiError> {
        self.record(Call::AlbumTracks(album_id.to_string()));
        Ok(self.tracks.get(album_id).cloned().unwrap_or_default())
    }

    async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.record(Call::CurrentUser);
        Ok(CurrentUser {
            id: "listener".to_string(),
            display_name: Some("Listener".to_string()),
        })
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<CreatePlaylistResponse, ApiError> {
        self.record(Call::CreatePlaylist(user_id.to_string(), name.to_string()));
        if self.fail_create {
            return Err(ApiError::Unexpected("create failed".to_string()));
        }

        Ok(CreatePlaylistResponse {
            id: "pl1".to_string(),
            name: name.to_string(),
            external_urls: ExternalUrls {
                spotify: Some("https://open.spotify.com/playlist/pl1".to_string()),
            },
        })
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<String, ApiError> {
        let done = self.added_chunks().len();
        self.record(Call::AddTracks(playlist_id.to_string(), track_ids.to_vec()));
        if track_ids.len() > 100 {
            return Err(ApiError::Unexpected("too many tracks".to_string()));
        }
        if self.fail_add_after.is_some_and(|limit| done >= limit) {
            return Err(ApiError::Unexpected("add failed".to_string()));
        }
        Ok(format!("snapshot-{}", done + 1))
    }
}
