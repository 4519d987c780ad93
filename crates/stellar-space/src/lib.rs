//! Procedural starfield: layered star populations, cluster biasing, and
//! spectral color classification, flattened into point-cloud buffers.

pub mod color;
pub mod population;
pub mod starfield;

pub use color::StarClass;
pub use population::{DEFAULT_CLUSTER_COUNT, SpaceError, StarPopulation, default_populations};
pub use starfield::{ClusterCenter, Starfield, StarfieldGenerator};
