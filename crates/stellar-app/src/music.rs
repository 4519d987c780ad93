//! Playlist player wiring.

use stellar_audio::{AudioBackend, MusicPlayer, NullBackend, Playlist, PlaylistError, Track, format_time};
use stellar_config::AudioConfig;
use tracing::info;

pub fn build_playlist(config: &AudioConfig) -> Result<Playlist, PlaylistError> {
    let tracks = config
        .tracks
        .iter()
        .map(|t| Track::new(t.name.clone(), t.artist.clone(), t.path.clone()))
        .collect();
    Playlist::new(tracks)
}

/// Build the player on the silent backend and honor `autoplay`.
pub fn start_player(config: &AudioConfig) -> Result<MusicPlayer<NullBackend>, PlaylistError> {
    let playlist = build_playlist(config)?;
    let mut player = MusicPlayer::new(playlist, NullBackend::default(), config.volume);
    if config.autoplay {
        player.play();
    }
    let track = player.now_playing();
    info!(
        track = %track.name,
        artist = %track.artist,
        playing = player.state().is_playing,
        length = %format_time(player.backend().duration().unwrap_or(f64::NAN)),
        "Music player ready"
    );
    Ok(player)
}
