//! Stellar viewer application.
//!
//! Loads configuration, generates the background starfield once, starts the
//! playlist player and loads the scene model in the background.

pub mod error;
pub mod music;
pub mod scene;

use std::path::Path;

use stellar_assets::ModelAsset;
use stellar_audio::{MusicPlayer, NullBackend};
use stellar_config::{CliArgs, Config};
use stellar_space::Starfield;
use tracing::info;

pub use error::AppError;

/// Everything produced at startup.
pub struct Session {
    pub starfield: Starfield,
    pub player: MusicPlayer<NullBackend>,
    /// `None` when the model failed to load.
    pub model: Option<ModelAsset>,
}

/// Resolve config, initialize logging and start the viewer.
pub fn run(args: CliArgs) -> Result<(), AppError> {
    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => Config::default_dir()?,
    };
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    stellar_log::init_logging(
        Some(&log_dir),
        config.debug.log_to_file || cfg!(debug_assertions),
        Some(&config),
    );
    info!(config_dir = %config_dir.display(), "Starting Stellar");

    let session = launch(&config, args.dump.as_deref())?;
    info!(
        stars = session.starfield.len(),
        model_loaded = session.model.is_some(),
        "Startup complete"
    );
    Ok(())
}

/// Build the session from an already-resolved config.
///
/// The starfield is generated before the model load is awaited; the two do
/// not depend on each other.
pub fn launch(config: &Config, dump_dir: Option<&Path>) -> Result<Session, AppError> {
    let generator = scene::build_generator(&config.starfield)?;
    let model_task = scene::start_model_load(&config.scene);

    let starfield = generator.generate();
    info!(
        stars = starfield.len(),
        clusters = generator.cluster_count(),
        bounding_radius = starfield.bounding_radius(),
        "Starfield generated"
    );

    if let Some(dir) = dump_dir {
        let (positions, colors) = scene::dump_buffers(&starfield, dir)?;
        info!(
            positions = %positions.display(),
            colors = %colors.display(),
            "Wrote starfield buffers"
        );
    }

    let player = music::start_player(&config.audio)?;
    let model = model_task.and_then(scene::finish_model_load);

    Ok(Session {
        starfield,
        player,
        model,
    })
}
