//! Where the artist tokens and the playlist name of a run come from.
//!
//! Artists come from an artists file, else from a comma separated list, else
//! from [`DEFAULT_ARTISTS`]. The playlist name comes from the command line,
//! else from a `playlist:` directive in the artists file, else
//! [`DEFAULT_PLAYLIST_NAME`].
//!
//! Artists file format:
//!
//! ```text
//! # playlist: Night Drive
//! YOASOBI
//! spotify:artist:4QvgGvpgzgyUOo8Yp8LDm9
//! https://open.spotify.com/artist/1snhtMLeb2DYoMOcVbb8iB?si=abc
//! ```
//!
//! Blank lines and `#` comments are ignored. `playlist: NAME` and
//! `# playlist: NAME` set the playlist name; the last one wins.

use std::{fmt, io, path::{Path, PathBuf}};

pub const DEFAULT_ARTISTS: [&str; 2] = ["Yoasobi", "Eve"];
pub const DEFAULT_PLAYLIST_NAME: &str = "まとめプレイリスト";

const PLAYLIST_DIRECTIVE: &str = "playlist:";

/// Tokens and optional playlist name read from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistInput {
    pub tokens: Vec<String>,
    pub playlist_name: Option<String>,
}

#[derive(Debug)]
pub enum InputError {
    NotFound(PathBuf),
    Io(PathBuf, io::Error),
    /// The source was read but held no artist.
    Empty(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotFound(path) => {
                write!(f, "Artists file not found: {}", path.display())
            }
            InputError::Io(path, err) => {
                write!(f, "Cannot read artists file {}: {}", path.display(), err)
            }
            InputError::Empty(source) => write!(
                f,
                "No artists given in {}. Use --artists-file or --artists.",
                source
            ),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

/// Parses the content of an artists file.
pub fn parse_artists_file(content: &str) -> ArtistInput {
    let mut input = ArtistInput::default();

    for line in content.lines() {
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        let is_comment = raw.starts_with('#');
        let body = if is_comment {
            raw.trim_start_matches('#').trim()
        } else {
            raw
        };

        if let Some(name) = playlist_directive(body) {
            input.playlist_name = Some(name.to_string()).filter(|n| !n.is_empty());
            continue;
        }

        if !is_comment {
            input.tokens.push(raw.to_string());
        }
    }

    input
}

/// Returns the value of a `playlist:` directive (key matched in any case).
fn playlist_directive(line: &str) -> Option<&str> {
    let head = line.get(..PLAYLIST_DIRECTIVE.len())?;
    head.eq_ignore_ascii_case(PLAYLIST_DIRECTIVE)
        .then(|| line[PLAYLIST_DIRECTIVE.len()..].trim())
}

/// Reads and parses an artists file.
///
/// A missing file and a file without artists are both errors; nothing should
/// be sent to Spotify in either case.
pub async fn read_artists_file(path: &Path) -> Result<ArtistInput, InputError> {
    let content = match async_fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(InputError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(InputError::Io(path.to_path_buf(), e)),
    };

    let input = parse_artists_file(&content);
    if input.tokens.is_empty() {
        return Err(InputError::Empty(path.display().to_string()));
    }

    Ok(input)
}

/// Splits a comma separated artist list, dropping blank entries.
pub fn parse_artist_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Picks the artist source for a run: the file if given, else the list, else
/// the defaults.
pub async fn gather(
    artists_file: Option<&Path>,
    artists: Option<&str>,
) -> Result<ArtistInput, InputError> {
    if let Some(path) = artists_file {
        return read_artists_file(path).await;
    }

    if let Some(list) = artists {
        let tokens = parse_artist_list(list);
        if tokens.is_empty() {
            return Err(InputError::Empty("--artists".to_string()));
        }
        return Ok(ArtistInput {
            tokens,
            playlist_name: None,
        });
    }

    Ok(ArtistInput {
        tokens: DEFAULT_ARTISTS.iter().map(|s| s.to_string()).collect(),
        playlist_name: None,
    })
}

/// Command line name first, then the file directive, then the default.
/// Blank names are ignored at every level.
pub fn resolve_playlist_name(cli_name: Option<&str>, file_name: Option<&str>) -> String {
    [cli_name, file_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PLAYLIST_NAME)
        .to_string()
}
