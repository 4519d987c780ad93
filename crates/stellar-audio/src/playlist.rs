//! Ordered, wrap-around list of tracks.

use std::path::PathBuf;

/// A single playable track.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub name: String,
    pub artist: String,
    /// Location of the audio file.
    pub path: PathBuf,
}

impl Track {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlaylistError {
    /// A player needs at least one track.
    #[error("playlist has no tracks")]
    Empty,
}

/// Non-empty list of tracks. Navigation wraps at both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }

    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.tracks.len() - 1) % self.tracks.len()
    }
}
