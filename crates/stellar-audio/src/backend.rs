//! Sound output seam.

use crate::playlist::Track;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AudioError {
    /// The output refused to start playback (e.g. no device, or autoplay blocked).
    #[error("playback refused: {0}")]
    PlaybackRefused(String),
}

/// A sink that can play one track at a time.
///
/// [`MusicPlayer`](crate::MusicPlayer) drives all transport decisions; a backend
/// only has to carry them out.
pub trait AudioBackend {
    /// Replace the current source with `track`, stopped at position zero.
    fn load(&mut self, track: &Track);
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
    /// Volume in [0, 1].
    fn set_volume(&mut self, volume: f32);
    fn set_muted(&mut self, muted: bool);
    /// Jump to `seconds` from the start of the current track.
    fn seek(&mut self, seconds: f64);
    /// Track length once known.
    fn duration(&self) -> Option<f64>;
    /// Current playback position in seconds.
    fn position(&self) -> f64;
}

/// Silent backend that only records what it was told.
#[derive(Clone, Debug, Default)]
pub struct NullBackend {
    pub loaded: Option<Track>,
    pub playing: bool,
    pub volume: f32,
    pub muted: bool,
    pub position: f64,
    /// Reported duration for every loaded track.
    pub duration: Option<f64>,
}

impl NullBackend {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }
}

impl AudioBackend for NullBackend {
    fn load(&mut self, track: &Track) {
        self.loaded = Some(track.clone());
        self.playing = false;
        self.position = 0.0;
    }

    fn play(&mut self) -> Result<(), AudioError> {
        if self.loaded.is_none() {
            return Err(AudioError::PlaybackRefused("no track loaded".into()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn seek(&mut self, seconds: f64) {
        self.position = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn position(&self) -> f64 {
        self.position
    }
}
