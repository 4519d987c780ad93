//! Transport state machine for the playlist player.

use tracing::{debug, info, warn};

use crate::backend::AudioBackend;
use crate::playlist::{Playlist, Track};

/// Default output volume.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Everything the player knows about playback, independent of the backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    /// Index into the playlist.
    pub current_track: usize,
    /// The user asked for playback. Stays true even if the backend refused.
    pub is_playing: bool,
    /// Volume in [0, 1], carried across track changes.
    pub volume: f32,
    /// Mute flag, carried across track changes.
    pub muted: bool,
}

/// Playlist player owning its state and an [`AudioBackend`].
pub struct MusicPlayer<B: AudioBackend> {
    playlist: Playlist,
    backend: B,
    state: PlayerState,
}

impl<B: AudioBackend> MusicPlayer<B> {
    /// Create a player with the first track loaded and paused.
    pub fn new(playlist: Playlist, backend: B, volume: f32) -> Self {
        let mut player = Self {
            playlist,
            backend,
            state: PlayerState {
                current_track: 0,
                is_playing: false,
                volume: sanitize_volume(volume, DEFAULT_VOLUME),
                muted: false,
            },
        };
        player.load_current();
        player
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The currently loaded track.
    pub fn now_playing(&self) -> &Track {
        &self.playlist.tracks()[self.state.current_track]
    }

    /// Start playback. A backend refusal is logged, not returned.
    pub fn play(&mut self) {
        if let Err(e) = self.backend.play() {
            warn!("Audio play failed: {e}");
        }
        self.state.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.backend.pause();
        self.state.is_playing = false;
    }

    /// Play when paused, pause when playing. Returns the new playing flag.
    pub fn toggle(&mut self) -> bool {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
        self.state.is_playing
    }

    /// Advance to the next track, wrapping at the end. Keeps playing if it was.
    pub fn next(&mut self) {
        let index = self.playlist.next_index(self.state.current_track);
        self.switch_to(index);
    }

    /// Step back to the previous track, wrapping at the start. Keeps playing if it was.
    pub fn previous(&mut self) {
        let index = self.playlist.previous_index(self.state.current_track);
        self.switch_to(index);
    }

    /// Set volume, clamped to [0, 1]. Non-finite input keeps the current volume.
    pub fn set_volume(&mut self, volume: f32) {
        self.state.volume = sanitize_volume(volume, self.state.volume);
        self.backend.set_volume(self.state.volume);
    }

    /// Flip mute. Returns the new mute flag.
    pub fn toggle_mute(&mut self) -> bool {
        self.state.muted = !self.state.muted;
        self.backend.set_muted(self.state.muted);
        self.state.muted
    }

    /// Seek to a fraction of the track in [0, 1]. Ignored until the duration is known.
    pub fn seek(&mut self, fraction: f64) {
        let Some(duration) = self.backend.duration() else {
            debug!("Seek ignored: duration unknown");
            return;
        };
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        self.backend.seek(fraction * duration);
    }

    /// Playback progress as a percentage of the track, when the duration is known.
    pub fn progress(&self) -> Option<f64> {
        match self.backend.duration() {
            Some(duration) if duration > 0.0 => Some(self.backend.position() / duration * 100.0),
            _ => None,
        }
    }

    /// The backend reports the current track finished: autoplay the next one.
    pub fn on_track_ended(&mut self) {
        let index = self.playlist.next_index(self.state.current_track);
        self.state.current_track = index;
        self.load_current();
        self.play();
    }

    fn switch_to(&mut self, index: usize) {
        self.state.current_track = index;
        self.load_current();
        if self.state.is_playing {
            self.play();
        }
    }

    fn load_current(&mut self) {
        let track = &self.playlist.tracks()[self.state.current_track];
        self.backend.load(track);
        self.backend.set_volume(self.state.volume);
        self.backend.set_muted(self.state.muted);
        info!(track = %track.name, artist = %track.artist, "Loaded track");
    }
}

/// Clamp to [0, 1], replacing NaN and infinities with `fallback`.
fn sanitize_volume(volume: f32, fallback: f32) -> f32 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
