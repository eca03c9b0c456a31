//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that runs while
//! `artistmix auth` waits for Spotify to redirect back.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization code from Spotify's
//!   authorization server and exchanges it for an access token using the
//!   PKCE verifier stored in the shared state.
//! - [`health`] - Returns status and version, handy to check that the
//!   callback server is reachable on the configured address.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use artistmix::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
