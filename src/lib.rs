//! artistmix
//!
//! Builds one Spotify playlist out of the albums and singles of a list of
//! artists. Artists can be given by name, ID, `spotify:artist:` URI or
//! `open.spotify.com` link; their tracks are merged in input order and every
//! track appears once.
//!
//! - [`mix`] holds the pipeline and is generic over [`spotify::SpotifyApi`]
//! - [`spotify`] is the Web API client, including the PKCE login flow
//! - [`input`] reads artists files and comma separated lists
//! - [`cli`] implements the commands of the `artistmix` binary
//! - [`management`], [`server`] and [`api`] keep the login token alive
//!
//! ```ignore
//! use artistmix::{mix::Pipeline, spotify::SpotifyClient};
//!
//! let client = SpotifyClient::from_cache().await?;
//! let tokens = vec!["YOASOBI".to_string(), "id:1snhtMLeb2DYoMOcVbb8iB".to_string()];
//! let report = Pipeline::new(&client).run(&tokens, "Night Drive").await?;
//! println!("{}", report.playlist.url);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod input;
pub mod management;
pub mod mix;
pub mod progress;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias for glue code that mixes error types.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line marked with a blue `o`.
///
/// ```ignore
/// info!("Collected {} tracks for {}", 42, "Eve");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line marked with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only the command layer calls this; library code returns errors instead.
///
/// ```ignore
/// error!("Cannot read token cache: {}", e);
/// // unreachable
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr. The run continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
