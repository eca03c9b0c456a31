use crate::{
    info,
    mix::{
        classifier::{ClassifiedArtist, classify},
        dedupe::dedupe,
        discography, playlist, resolver,
    },
    progress::with_spinner,
    spotify::{ApiError, SpotifyApi},
    types::{ArtistTableRow, PlaylistRef},
    warning,
};

/// What happened to one input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistStatus {
    /// The token led to an artist ID and its discography was read.
    Collected { artist_id: String, tracks: usize },
    /// The name search returned nothing.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistOutcome {
    pub token: String,
    pub classified: ClassifiedArtist,
    pub status: ArtistStatus,
}

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixReport {
    /// One entry per input token, in input order.
    pub outcomes: Vec<ArtistOutcome>,
    /// Tracks collected before deduplication.
    pub total_tracks: usize,
    pub unique_tracks: usize,
    pub playlist: PlaylistRef,
}

impl MixReport {
    /// Tokens whose artist could not be found.
    pub fn not_found(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.status == ArtistStatus::NotFound)
            .map(|o| o.token.as_str())
            .collect()
    }

    pub fn table_rows(&self) -> Vec<ArtistTableRow> {
        self.outcomes
            .iter()
            .map(|o| {
                let (id, tracks) = match &o.status {
                    ArtistStatus::Collected { artist_id, tracks } => {
                        (artist_id.clone(), tracks.to_string())
                    }
                    ArtistStatus::NotFound => ("-".to_string(), "not found".to_string()),
                };
                ArtistTableRow {
                    artist: o.token.clone(),
                    lookup: o.classified.kind().to_string(),
                    id,
                    tracks,
                }
            })
            .collect()
    }
}

/// Runs tokens through classification, resolution, discography collection,
/// deduplication and playlist creation.
///
/// Tokens are handled one after another in input order, and every Spotify
/// call is awaited before the next one starts, so the playlist order only
/// depends on the input and Spotify's catalog.
pub struct Pipeline<'a, C: SpotifyApi> {
    client: &'a C,
    show_progress: bool,
}

impl<'a, C: SpotifyApi> Pipeline<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            show_progress: true,
        }
    }

    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Builds the playlist `playlist_name` from the discographies of all
    /// `tokens`.
    ///
    /// Artists that cannot be found are reported and skipped. If none is
    /// found at all, an empty playlist is still created. Any API error stops
    /// the run and is returned.
    pub async fn run(
        &self,
        tokens: &[String],
        playlist_name: &str,
    ) -> Result<MixReport, ApiError> {
        let mut outcomes = Vec::with_capacity(tokens.len());
        let mut collected: Vec<String> = Vec::new();

        for token in tokens {
            let classified = classify(token);

            let artist_id = match &classified {
                ClassifiedArtist::ResolvedId(id) => Some(id.clone()),
                ClassifiedArtist::SearchQuery(query) => {
                    with_spinner(
                        self.show_progress,
                        format!("Searching artist {}...", query),
                        resolver::resolve(self.client, query),
                    )
                    .await?
                }
            };

            let Some(artist_id) = artist_id else {
                warning!("Artist not found: {}", token);
                outcomes.push(ArtistOutcome {
                    token: token.clone(),
                    classified,
                    status: ArtistStatus::NotFound,
                });
                continue;
            };

            let tracks = with_spinner(
                self.show_progress,
                format!("Collecting discography of {}...", token),
                discography::collect(self.client, &artist_id),
            )
            .await?;

            if tracks.is_empty() {
                warning!("No tracks found for {} ({})", token, artist_id);
            } else {
                info!("Collected {} tracks for {}", tracks.len(), token);
            }

            outcomes.push(ArtistOutcome {
                token: token.clone(),
                classified,
                status: ArtistStatus::Collected {
                    artist_id,
                    tracks: tracks.len(),
                },
            });
            collected.extend(tracks);
        }

        if !outcomes
            .iter()
            .any(|o| matches!(o.status, ArtistStatus::Collected { .. }))
        {
            warning!("No artist could be resolved, the playlist will be empty.");
        }

        let total_tracks = collected.len();
        let unique = dedupe(collected);

        let playlist = with_spinner(
            self.show_progress,
            format!("Creating playlist {} with {} tracks...", playlist_name, unique.len()),
            playlist::build(self.client, playlist_name, &unique),
        )
        .await?;

        Ok(MixReport {
            outcomes,
            total_tracks,
            unique_tracks: unique.len(),
            playlist,
        })
    }
}
