//! paintfill - Tolerance-based flood fill for RGBA images
//!
//! A paint-bucket fill: starting from a seed pixel, recolor the
//! 4-connected region whose colors are within a tolerance of the seed's
//! original color, stopping at opaque near-black outlines.
//!
//! # Example
//!
//! ```
//! use paintfill::{FillOptions, PixelBuffer, Rgba, SeedPoint, flood_fill};
//!
//! let mut canvas = PixelBuffer::new(16, 16, Rgba::WHITE).unwrap();
//! let outcome = flood_fill(
//!     &mut canvas,
//!     SeedPoint::new(8, 8),
//!     Rgba::rgb(255, 0, 0),
//!     &FillOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(outcome.pixels_filled(), 256);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use paintfill_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use paintfill_io as io;
pub use paintfill_region as region;

// The fill entry points are used often enough to live at the top level
pub use paintfill_region::{
    FillBounds, FillOptions, FillOutcome, FillStats, RegionError, SeedPoint, fill, flood_fill,
};
