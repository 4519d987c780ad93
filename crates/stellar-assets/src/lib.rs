//! Background model loading.
//!
//! A load runs on its own thread and reports back through a channel of
//! [`LoadEvent`]s: any number of progress updates followed by exactly one
//! outcome, either the loaded asset or the reason it failed.

mod error;
mod loader;
mod model;

pub use error::AssetError;
pub use loader::{DEFAULT_CHUNK_SIZE, LoadEvent, LoadProgress, LoadTask, ModelLoader};
pub use model::{ModelAsset, ModelFormat};
