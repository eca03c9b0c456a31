use std::path::PathBuf;

use tabled::Table;

use crate::{
    error, info, input,
    mix::Pipeline,
    spotify::SpotifyClient,
    success, warning,
};

/// Creates one playlist holding every track of the requested artists.
///
/// The artist list is read and validated before anything is sent to
/// Spotify; an unreadable or empty artists file ends the program. Unknown
/// artists are reported and skipped. API failures end the program with the
/// error message, in which case no playlist (or a partly filled one, if the
/// failure happened while adding tracks) is left behind.
pub async fn playlist(
    artists_file: Option<PathBuf>,
    artists: Option<String>,
    playlist_name: Option<String>,
    quiet: bool,
) {
    let input = match input::gather(artists_file.as_deref(), artists.as_deref()).await {
        Ok(input) => input,
        Err(e) => error!("{}", e),
    };

    let name = input::resolve_playlist_name(
        playlist_name.as_deref(),
        input.playlist_name.as_deref(),
    );

    let client = match SpotifyClient::from_cache().await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    info!(
        "Building playlist \"{}\" from {} artist(s)",
        name,
        input.tokens.len()
    );

    let report = match Pipeline::new(&client)
        .show_progress(!quiet)
        .run(&input.tokens, &name)
        .await
    {
        Ok(report) => report,
        Err(e) => error!("Run aborted: {}", e),
    };

    println!("{}", Table::new(report.table_rows()));

    let not_found = report.not_found();
    if !not_found.is_empty() {
        warning!(
            "{} artist(s) not found: {}",
            not_found.len(),
            not_found.join(", ")
        );
    }

    success!(
        "Playlist \"{}\" created with {} tracks ({} duplicates removed): {}",
        report.playlist.name,
        report.unique_tracks,
        report.total_tracks - report.unique_tracks,
        report.playlist.url
    );
}
