//! Configuration management for artistmix.
//!
//! Configuration values come from environment variables, which may be
//! populated from `.env` files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SPOTIFY_API_AUTH_SCOPE: &str = "playlist-modify-public playlist-modify-private";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Loads environment variables from `.env` files.
///
/// Creates the `artistmix` directory inside the platform-specific local data
/// directory if needed, then loads `artistmix/.env` from there when it exists,
/// followed by a `.env` in the current working directory. `dotenv` never
/// overrides variables that are already set, so real environment variables
/// always win and the data directory file wins over the working directory one.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/artistmix/.env`
/// - macOS: `~/Library/Application Support/artistmix/.env`
/// - Windows: `%LOCALAPPDATA%/artistmix/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed. A missing file is not an error.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the `artistmix` folder inside the local data directory.
///
/// Falls back to the current directory when the platform has no local data
/// directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("artistmix");
    path
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the address the local OAuth callback server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:8888`.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify application client ID.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_ID`. There is no sensible default, so a
/// missing or empty value is reported as an error.
pub fn spotify_client_id() -> Result<String, String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| "SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string())
}

/// Returns the OAuth redirect URI registered for the Spotify application.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_SPOTIFY_API_REDIRECT_URI)
}

/// Returns the space separated scope list requested during authorization.
///
/// Creating and filling playlists needs both `playlist-modify-public` and
/// `playlist-modify-private`, which is the default.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SPOTIFY_API_AUTH_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_API_AUTH_URL)
}

/// Returns the Spotify Web API base URL, without a trailing slash.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
        .trim_end_matches('/')
        .to_string()
}

pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL)
}
