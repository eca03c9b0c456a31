//! # CLI Module
//!
//! User-facing command implementations of artistmix. Each command handles
//! its own console output and turns unrecoverable errors into an `error!`
//! message and exit code 1.
//!
//! ## Commands
//!
//! - [`auth`] - Runs the Spotify OAuth PKCE flow and caches the token
//! - [`playlist`] - Collects every track of the given artists into a new
//!   playlist
//!
//! ## Usage Patterns
//!
//! ```bash
//! artistmix auth                                   # once
//! artistmix playlist                               # default artists
//! artistmix playlist -a "YOASOBI, Eve, ずっと真夜中でいいのに。"
//! artistmix playlist -f artists.txt -p "Night Drive"
//! ```
//!
//! ## Output
//!
//! Messages use the crate's console macros (`info!`, `success!`,
//! `warning!`, `error!`). Spotify calls show a spinner unless `--quiet` is
//! given, and a table summarizing every artist is printed at the end of a
//! playlist run.

mod auth;
mod playlist;

pub use auth::auth;
pub use playlist::playlist;
