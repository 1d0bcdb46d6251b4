//! paintfill-region - Region filling for paintfill
//!
//! This crate provides the paint-bucket fill and the pieces it is built
//! from:
//!
//! - **Flood fill** - Tolerance-based scanline fill of a 4-connected region
//! - **Seed stack** - Explicit LIFO of pending seeds; the fill never recurses
//! - **Scan-row tracker** - Per-row record of columns already scanned
//!
//! # Examples
//!
//! ## Filling an enclosed area
//!
//! ```
//! use paintfill_core::{PixelBuffer, Rgba};
//! use paintfill_region::{FillOptions, FillOutcome, SeedPoint, flood_fill};
//!
//! // White canvas with a black 4x4 square outline
//! let mut buf = PixelBuffer::new(8, 8, Rgba::WHITE).unwrap();
//! for i in 2..6 {
//!     buf.set_pixel(i, 2, Rgba::BLACK).unwrap();
//!     buf.set_pixel(i, 5, Rgba::BLACK).unwrap();
//!     buf.set_pixel(2, i, Rgba::BLACK).unwrap();
//!     buf.set_pixel(5, i, Rgba::BLACK).unwrap();
//! }
//!
//! let blue = Rgba::rgb(0, 0, 255);
//! let outcome = flood_fill(&mut buf, SeedPoint::new(3, 3), blue, &FillOptions::default()).unwrap();
//! assert_eq!(outcome.pixels_filled(), 4);
//!
//! // Filling again with the same color does nothing
//! let again = flood_fill(&mut buf, SeedPoint::new(3, 3), blue, &FillOptions::default()).unwrap();
//! assert_eq!(again, FillOutcome::AlreadyFilled);
//! ```

pub mod error;
pub mod floodfill;
pub mod scanline;
pub mod stack;

// Re-export core types
pub use paintfill_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export fill types and functions
pub use floodfill::{FillBounds, FillOptions, FillOutcome, FillStats, fill, flood_fill};

// Re-export building blocks
pub use scanline::{Claim, Relation, ScanTracker, Span, Unscanned};
pub use stack::{SeedPoint, SeedStack};
