//! Error types for paintfill-region

use thiserror::Error;

/// Errors that can occur during region filling
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] paintfill_core::Error),

    /// Seed lies outside the buffer
    #[error("invalid seed position: ({x}, {y}) outside {width}x{height} buffer")]
    InvalidSeed {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
