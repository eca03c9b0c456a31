//! Turns a raw artist token into something the pipeline can act on.

use std::fmt;

const URI_MARKER: &str = "spotify:artist:";
const URL_MARKER: &str = "open.spotify.com/artist/";
const ID_PREFIXES: [&str; 2] = ["artist_id:", "id:"];

/// Length range of a bare token that is taken to be a Spotify artist ID.
/// Spotify IDs are 22 character base62 strings.
const BARE_ID_LEN: std::ops::RangeInclusive<usize> = 20..=24;

/// Outcome of classifying a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedArtist {
    /// The token named an artist ID directly.
    ResolvedId(String),
    /// The token is an artist name that still has to be searched for.
    SearchQuery(String),
}

impl ClassifiedArtist {
    /// Short label used in the run summary.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifiedArtist::ResolvedId(_) => "id",
            ClassifiedArtist::SearchQuery(_) => "search",
        }
    }
}

impl fmt::Display for ClassifiedArtist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifiedArtist::ResolvedId(id) => write!(f, "id {}", id),
            ClassifiedArtist::SearchQuery(query) => write!(f, "search \"{}\"", query),
        }
    }
}

/// Classifies an artist token. The first rule that matches wins:
///
/// 1. backticks are removed and the rest is trimmed
/// 2. `id:` / `artist_id:` prefix (any case) gives the remainder as ID
/// 3. a `spotify:artist:<id>` URI anywhere in the token
/// 4. an `open.spotify.com/artist/<id>` link anywhere in the token
/// 5. a bare token of 20 to 24 ASCII letters and digits is taken as an ID
/// 6. anything else is searched for by name
///
/// Classification never fails. A token that only looks like an ID may not
/// exist on Spotify; that surfaces later as an empty discography.
pub fn classify(token: &str) -> ClassifiedArtist {
    let cleaned = token.replace('`', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return ClassifiedArtist::SearchQuery(String::new());
    }

    if let Some(id) = strip_id_prefix(cleaned) {
        return ClassifiedArtist::ResolvedId(id.trim().to_string());
    }

    if let Some(id) = id_after_marker(cleaned, URI_MARKER) {
        return ClassifiedArtist::ResolvedId(id.to_string());
    }

    if let Some(id) = id_after_marker(cleaned, URL_MARKER) {
        return ClassifiedArtist::ResolvedId(id.to_string());
    }

    if looks_like_artist_id(cleaned) {
        return ClassifiedArtist::ResolvedId(cleaned.to_string());
    }

    ClassifiedArtist::SearchQuery(cleaned.to_string())
}

fn strip_id_prefix(token: &str) -> Option<&str> {
    ID_PREFIXES.iter().find_map(|prefix| {
        let head = token.get(..prefix.len())?;
        head.eq_ignore_ascii_case(prefix)
            .then(|| &token[prefix.len()..])
    })
}

/// Finds `marker` case-insensitively and returns the run of ASCII
/// alphanumerics right after it, if there is one. The ID keeps its case.
fn id_after_marker<'a>(token: &'a str, marker: &str) -> Option<&'a str> {
    // ASCII lowercasing keeps byte offsets identical to `token`.
    let lowered = token.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(found) = lowered[search_from..].find(marker) {
        let start = search_from + found + marker.len();
        let rest = &token[start..];
        let len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        if len > 0 {
            return Some(&rest[..len]);
        }
        search_from = start;
    }

    None
}

fn looks_like_artist_id(token: &str) -> bool {
    BARE_ID_LEN.contains(&token.len()) && token.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_search_skips_empty_matches() {
        let token = "spotify:artist: then spotify:artist:Real1";
        assert_eq!(id_after_marker(token, URI_MARKER), Some("Real1"));
    }

    #[test]
    fn marker_search_keeps_original_case() {
        assert_eq!(
            id_after_marker("OPEN.SPOTIFY.COM/ARTIST/AbCd", URL_MARKER),
            Some("AbCd")
        );
    }

    #[test]
    fn id_prefix_does_not_split_multibyte_chars() {
        assert_eq!(strip_id_prefix("日本"), None);
        assert_eq!(strip_id_prefix("I"), None);
    }
}
