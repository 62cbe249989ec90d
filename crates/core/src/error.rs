//! Error types for the fill-rate benchmark core.

use thiserror::Error;

/// Errors produced by benchmark setup and timing.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Texture count outside `0..=2`.
    #[error("invalid texture count {0}: must be between 0 and 2")]
    InvalidTexCount(u8),

    /// Extra math stage count outside `0..=4`.
    #[error("invalid extra math count {0}: must be between 0 and 4")]
    InvalidExtraMath(u8),

    /// Width or height of the render target was zero.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The timed batch reported no elapsed time, so throughput is undefined.
    #[error("elapsed time is zero; throughput is undefined")]
    ZeroElapsed,

    /// A GL object (buffer, vertex array, texture) could not be created.
    #[error("GL resource creation failed: {0}")]
    Resource(String),

    /// A texture pattern could not be written to disk.
    #[error("I/O error: {0}")]
    Io(String),
}
