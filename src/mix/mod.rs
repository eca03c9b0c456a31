//! # Mix Module
//!
//! The aggregation pipeline: every input token becomes an artist, every
//! artist becomes a list of track IDs, and the combined list becomes one new
//! playlist.
//!
//! ```text
//! token ─ classifier ─┬─ ResolvedId ───────────────┐
//!                     └─ SearchQuery ─ resolver ───┤
//!                                                  ↓
//!                                            discography
//!                                                  ↓
//!                         (all tokens) ──────── dedupe
//!                                                  ↓
//!                                              playlist
//! ```
//!
//! Every step talks to Spotify through [`crate::spotify::SpotifyApi`], so the
//! whole pipeline runs against an in-memory client in tests.

pub mod classifier;
pub mod dedupe;
pub mod discography;
pub mod pipeline;
pub mod playlist;
pub mod resolver;

pub use classifier::{ClassifiedArtist, classify};
pub use dedupe::dedupe;
pub use pipeline::{ArtistOutcome, ArtistStatus, MixReport, Pipeline};
