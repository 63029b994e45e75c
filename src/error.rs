//! Error type shared by the fill entry points.
//!
//! Every variant is a caller contract violation. Fills are deterministic and
//! have no transient failure modes, so nothing here is worth retrying.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FillError {
    #[error("Seed ({x}, {y}) is outside the {width}x{height} image")]
    SeedOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("Frame interval must be positive")]
    InvalidFrameInterval,
    #[error("Grid spacing must be positive")]
    InvalidGridSpacing,
    #[error("Gradient radius must be positive")]
    InvalidRadius,
    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),
    #[error("Unknown ordering '{0}' (expected 'dfs' or 'bfs')")]
    InvalidOrdering(String),
    #[error("Invalid fill configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FillError>;
