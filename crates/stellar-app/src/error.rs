//! Application-level errors.

use stellar_audio::PlaylistError;
use stellar_config::ConfigError;
use stellar_space::SpaceError;

/// Fatal startup errors. Model load failures are logged instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Starfield(#[from] SpaceError),

    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    /// Writing the buffer dump failed.
    #[error("failed to write starfield buffers: {0}")]
    Dump(#[source] std::io::Error),
}
