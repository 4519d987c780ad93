//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "stellar";

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Background starfield generation.
    pub starfield: StarfieldConfig,
    /// Music player settings and playlist.
    pub audio: AudioConfig,
    /// Scene model settings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Starfield generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Distance shells, generated in order.
    pub populations: Vec<PopulationConfig>,
    /// Number of cluster directions (0 disables clustering).
    pub cluster_count: u32,
    /// Fixed seed for a reproducible sky. `None` gives a fresh sky every run.
    pub seed: Option<u64>,
}

/// One distance shell of stars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PopulationConfig {
    pub count: u32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Share of stars pulled toward a cluster direction, in [0, 1].
    pub cluster_factor: f32,
}

/// Music player configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Initial volume (0.0 - 1.0).
    pub volume: f32,
    /// Start playing the first track on launch.
    pub autoplay: bool,
    /// Playlist in playback order.
    pub tracks: Vec<TrackConfig>,
}

/// A playlist entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackConfig {
    pub name: String,
    pub artist: String,
    pub path: PathBuf,
}

/// Scene model configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Model file loaded at startup.
    pub model_path: PathBuf,
    /// Bytes read between load progress reports.
    pub load_chunk_size: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            populations: vec![
                // Distant background stars
                PopulationConfig {
                    count: 1500,
                    min_radius: 800.0,
                    max_radius: 1500.0,
                    cluster_factor: 0.7,
                },
                // Mid-distance stars
                PopulationConfig {
                    count: 1500,
                    min_radius: 500.0,
                    max_radius: 800.0,
                    cluster_factor: 0.7,
                },
                // Closer bright stars
                PopulationConfig {
                    count: 800,
                    min_radius: 300.0,
                    max_radius: 500.0,
                    cluster_factor: 0.7,
                },
            ],
            cluster_count: 12,
            seed: None,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 0.5,
            autoplay: false,
            tracks: vec![
                TrackConfig {
                    name: "I really want to stay at your house".to_string(),
                    artist: "Rosa Walton and Hallie Coggins".to_string(),
                    path: PathBuf::from("music").join("i-really-want-to-stay-at-your-house.mp3"),
                },
                TrackConfig {
                    name: "City Ruins (Shade)".to_string(),
                    artist: "Keiichi Okabe".to_string(),
                    path: PathBuf::from("music").join("city-ruins-shade.mp3"),
                },
                TrackConfig {
                    name: "Malenia, Blade of Miquella".to_string(),
                    artist: "Yuka Kitamura".to_string(),
                    path: PathBuf::from("music").join("malenia-blade-of-miquella.mp3"),
                },
            ],
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("scene.glb"),
            load_chunk_size: 64 * 1024,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform configuration directory for the viewer (`<config>/stellar`).
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|base| base.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
