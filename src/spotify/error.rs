use std::fmt;

use reqwest::StatusCode;

/// Errors raised while talking to the Spotify Web API.
#[derive(Debug)]
pub enum ApiError {
    /// Network failure, undecodable body or a non-success status.
    Http(reqwest::Error),
    /// No usable access token (never authorized, or the cache is unreadable).
    Auth(String),
    /// Spotify asked us to wait longer than we are willing to.
    RateLimited(u64),
    /// Spotify answered with something we could not use.
    Unexpected(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http(err) => err.status(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(err) => write!(f, "Spotify request failed: {}", err),
            ApiError::Auth(msg) => write!(
                f,
                "Not authorized: {}. Please run artistmix auth",
                msg
            ),
            ApiError::RateLimited(secs) => write!(
                f,
                "Rate limited by Spotify for {} seconds. Try again later",
                secs
            ),
            ApiError::Unexpected(msg) => write!(f, "Unexpected Spotify response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}
