//! Error types for terrain generation and export

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid grid dimension: {0}")]
    InvalidDimension(String),

    #[error("Elevation query ({x}, {z}) outside grid range [0, {last}]")]
    OutOfRangeQuery { x: usize, z: usize, last: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
