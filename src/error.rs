//! Error types for the renderer.

use crate::view::MIN_DEPTH;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The sampling step must be finite and strictly positive.
    #[error("invalid step: {0} (must be finite and > 0)")]
    InvalidStep(f64),

    #[error("invalid center: components must be finite")]
    InvalidCenter,

    /// Zoom factors must lie strictly between 0 and 1.
    #[error("invalid zoom factor: {0} (must be in (0, 1))")]
    InvalidZoomFactor(f64),

    #[error("invalid depth: {depth} (must be >= {floor})")]
    InvalidDepth { depth: u32, floor: u32 },

    #[error("invalid depth floor: {0} (must be >= {})", MIN_DEPTH)]
    InvalidDepthFloor(u32),

    #[error("invalid worker count: {0} (must be > 0)")]
    InvalidWorkers(usize),

    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}
