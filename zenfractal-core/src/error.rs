//! Error types for frame requests and numeric input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("viewport {width}x{height} exceeds the {limit} pixel limit")]
    ViewportTooLarge { width: u32, height: u32, limit: u64 },

    #[error("max_iterations must be in 1..={limit}, got {got}")]
    InvalidMaxIterations { got: u32, limit: u32 },

    /// Zoom that is zero, negative, non-finite or subnormal
    #[error("zoom must be a positive normal number, got {0}")]
    InvalidZoom(f64),

    #[error("invalid number {input:?}: {reason}")]
    InvalidNumber { input: String, reason: String },

    #[error("malformed frame request: {0}")]
    Json(#[from] serde_json::Error),
}
