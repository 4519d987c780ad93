//! Command-line argument parsing for the Stellar viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Stellar command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "stellar", about = "Starfield viewer with a playlist player")]
pub struct CliArgs {
    /// Seed for a reproducible starfield.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of star cluster directions.
    #[arg(long)]
    pub clusters: Option<u32>,

    /// Initial music volume (0.0 - 1.0).
    #[arg(long)]
    pub volume: Option<f32>,

    /// Model file to load.
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the generated position and color buffers into this directory.
    #[arg(long)]
    pub dump: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.starfield.seed = Some(seed);
        }
        if let Some(clusters) = args.clusters {
            self.starfield.cluster_count = clusters;
        }
        if let Some(volume) = args.volume {
            if volume.is_finite() {
                self.audio.volume = volume.clamp(0.0, 1.0);
            } else {
                log::warn!("Ignoring non-finite volume override {volume}");
            }
        }
        if let Some(ref model) = args.model {
            self.scene.model_path = model.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(42),
            volume: Some(0.25),
            model: Some(PathBuf::from("ship.glb")),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.starfield.seed, Some(42));
        assert_eq!(config.audio.volume, 0.25);
        assert_eq!(config.scene.model_path, PathBuf::from("ship.glb"));
        // Non-overridden fields retain defaults
        assert_eq!(config.starfield.cluster_count, 12);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_volume_clamped() {
        let mut config = Config::default();
        let args = CliArgs {
            volume: Some(4.0),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.audio.volume, 1.0);
    }

    #[test]
    fn test_cli_nan_volume_ignored() {
        let mut config = Config::default();
        config.audio.volume = 0.3;
        let args = CliArgs::parse_from(["stellar", "--volume", "NaN"]);
        assert!(args.volume.is_some_and(f32::is_nan));
        config.apply_cli_overrides(&args);
        assert_eq!(config.audio.volume, 0.3);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "stellar",
            "--seed",
            "7",
            "--clusters",
            "0",
            "--dump",
            "out",
        ]);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.clusters, Some(0));
        assert_eq!(args.dump, Some(PathBuf::from("out")));
        assert!(args.model.is_none());
    }
}
