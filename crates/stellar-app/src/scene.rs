//! Scene setup: the background starfield and the foreground model.

use std::path::{Path, PathBuf};

use stellar_assets::{LoadTask, ModelAsset, ModelLoader};
use stellar_config::{SceneConfig, StarfieldConfig};
use stellar_space::{SpaceError, StarPopulation, Starfield, StarfieldGenerator};
use tracing::{error, info};

use crate::error::AppError;

/// File names written by [`dump_buffers`].
pub const POSITIONS_FILE: &str = "positions.f32";
pub const COLORS_FILE: &str = "colors.f32";

/// Build a generator from config, validating every population.
pub fn build_generator(config: &StarfieldConfig) -> Result<StarfieldGenerator, SpaceError> {
    let populations = config
        .populations
        .iter()
        .map(|p| StarPopulation::new(p.count, p.min_radius, p.max_radius, p.cluster_factor))
        .collect::<Result<Vec<_>, _>>()?;

    let generator = StarfieldGenerator::new(populations).with_cluster_count(config.cluster_count);
    Ok(match config.seed {
        Some(seed) => generator.with_seed(seed),
        None => generator,
    })
}

/// Write the position and color buffers as raw native-endian `f32` triples.
pub fn dump_buffers(field: &Starfield, dir: &Path) -> Result<(PathBuf, PathBuf), AppError> {
    std::fs::create_dir_all(dir).map_err(AppError::Dump)?;
    let positions = dir.join(POSITIONS_FILE);
    let colors = dir.join(COLORS_FILE);
    std::fs::write(&positions, field.position_bytes()).map_err(AppError::Dump)?;
    std::fs::write(&colors, field.color_bytes()).map_err(AppError::Dump)?;
    Ok((positions, colors))
}

/// Start loading the scene model in the background.
pub fn start_model_load(config: &SceneConfig) -> Option<LoadTask> {
    match ModelLoader::new(config.load_chunk_size).spawn(&config.model_path) {
        Ok(task) => Some(task),
        Err(e) => {
            error!("Error loading model: {e}");
            None
        }
    }
}

/// Wait for a model load, logging progress at whole-percent steps. Failures
/// are logged and yield `None`.
pub fn finish_model_load(task: LoadTask) -> Option<ModelAsset> {
    let mut last_logged: Option<u32> = None;
    let outcome = task.wait(|progress| {
        let Some(percent) = progress.percent() else {
            return;
        };
        let step = percent.floor() as u32;
        if last_logged != Some(step) {
            last_logged = Some(step);
            info!("Loading progress: {percent:.2}%");
        }
    });

    match outcome {
        Ok(asset) => {
            info!("Model loaded successfully");
            Some(asset)
        }
        Err(e) => {
            error!("Error loading model: {e}");
            None
        }
    }
}
