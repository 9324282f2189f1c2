//! Error types for beacon detection

use thiserror::Error;

/// Result type for beacon detection operations
pub type Result<T> = std::result::Result<T, BeaconError>;

/// Error type for detection, configuration and corpus evaluation
#[derive(Debug, Error)]
pub enum BeaconError {
    /// Image (or tally) cannot be classified
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Raw pixel buffer does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Label does not name a beacon state
    #[error("unknown beacon state: {0}")]
    UnknownState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),

    #[cfg(feature = "vision")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl BeaconError {
    /// Image with a zero dimension
    pub fn empty_image(width: u32, height: u32) -> Self {
        Self::InvalidInput(format!(
            "image is {width}x{height}, both dimensions must be non-zero"
        ))
    }

    /// Column counts that are empty or of unequal length
    pub fn malformed_tally(reds: usize, blues: usize) -> Self {
        Self::InvalidInput(format!(
            "tally has {reds} red and {blues} blue columns, expected equal non-zero lengths"
        ))
    }
}
