//! Configuration for the Stellar viewer.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and tolerate missing or unknown fields.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AudioConfig, Config, DebugConfig, PopulationConfig, SceneConfig, StarfieldConfig, TrackConfig,
};
pub use error::ConfigError;
