//! Error types surfaced by level generation and configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{axis} room size range is empty: min {min} > max {max}")]
    EmptyRoomRange { axis: &'static str, min: i32, max: i32 },

    #[error("{axis} minimum room size must be positive, got {min}")]
    NonPositiveRoomSize { axis: &'static str, min: i32 },

    #[error("room margin must not be negative, got {0}")]
    NegativeMargin(i32),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("interact range must be a positive number of tiles, got {0}")]
    InvalidInteractRange(f32),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid generation config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("map {width}x{height} cannot hold a {room_width}x{room_height} room")]
    MapTooSmall { width: u32, height: u32, room_width: i32, room_height: i32 },

    #[error("map {width}x{height} exceeds the grid coordinate range")]
    MapTooLarge { width: u32, height: u32 },

    #[error("unplayable level: no room accepted after {trials} placement trials")]
    NoRoomsPlaced { trials: u32 },
}

impl GenerationError {
    /// Whether generating again with another seed could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NoRoomsPlaced { .. })
    }
}
