//! Playlist music player.
//!
//! Player state lives in [`MusicPlayer`]; actual sound output sits behind the
//! [`AudioBackend`] trait so the transport logic can run headless.

mod backend;
mod player;
mod playlist;
mod time;

pub use backend::{AudioBackend, AudioError, NullBackend};
pub use player::{DEFAULT_VOLUME, MusicPlayer, PlayerState};
pub use playlist::{Playlist, PlaylistError, Track};
pub use time::format_time;
