//! Configuration errors
//!
//! Everything that can go wrong happens while a level or tuning is loaded.
//! Once a `World` exists the simulation never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("kinematic platform bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: f32, max: f32 },

    #[error("kinematic platform has invalid speed {0}")]
    InvalidSpeed(f32),

    #[error("world half extent {half_extent} needs more than {max_tiles} ground tiles")]
    WorldTooLarge { half_extent: f32, max_tiles: usize },

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("checkpoint group references checkpoint {index}, but only {count} exist")]
    UnknownCheckpoint { index: usize, count: usize },

    #[error("checkpoint {0} is listed in more than one group")]
    DuplicateGroupMember(usize),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
