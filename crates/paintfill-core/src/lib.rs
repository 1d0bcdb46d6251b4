//! paintfill Core - Basic data structures for flood filling
//!
//! This crate provides the fundamental data structures used throughout
//! the paintfill library:
//!
//! - [`Rgba`] - Packed 8-bit-per-channel color with tolerance comparison
//! - [`PixelBuffer`] - The mutable raster a fill operates on
//! - [`Error`] / [`Result`] - Core error type

pub mod buffer;
pub mod color;
pub mod error;

pub use buffer::PixelBuffer;
pub use color::{DEFAULT_TOLERANCE, Rgba};
pub use error::{Error, Result};
