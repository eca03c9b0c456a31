use std::{collections::BTreeSet, fmt};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Release groups known to the artist albums endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseKind {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl ReleaseKind {
    pub const ALL: [ReleaseKind; 4] = [
        ReleaseKind::Album,
        ReleaseKind::Single,
        ReleaseKind::AppearsOn,
        ReleaseKind::Compilation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseKind::Album => "album",
            ReleaseKind::Single => "single",
            ReleaseKind::AppearsOn => "appears_on",
            ReleaseKind::Compilation => "compilation",
        }
    }

    /// Maps an `album_group` / `album_type` value back to a kind.
    pub fn from_group(group: &str) -> Option<Self> {
        let normalized = group.trim().to_ascii_lowercase().replace('-', "_");
        ReleaseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered set of release kinds, rendered as the comma separated
/// `include_groups` query value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseKinds(pub BTreeSet<ReleaseKind>);

impl ReleaseKinds {
    /// Albums and singles. Compilations and appearances are left out so other
    /// artists' tracks never end up in the playlist.
    pub fn discography() -> Self {
        ReleaseKinds(BTreeSet::from([ReleaseKind::Album, ReleaseKind::Single]))
    }

    pub fn iter(&self) -> impl Iterator<Item = ReleaseKind> + '_ {
        self.0.iter().copied()
    }

    /// Whether a release with the given group string belongs to this set.
    /// Unknown groups never match.
    pub fn includes_group(&self, group: &str) -> bool {
        ReleaseKind::from_group(group).is_some_and(|kind| self.0.contains(&kind))
    }
}

impl Default for ReleaseKinds {
    fn default() -> Self {
        ReleaseKinds::discography()
    }
}

impl fmt::Display for ReleaseKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Builds the `spotify:track:<id>` URI expected by the playlist endpoints.
pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{}", track_id)
}
