//! PixelBuffer - The mutable raster a fill operates on
//!
//! # Pixel layout
//!
//! - One packed [`Rgba`] per pixel, no row padding
//! - Rows are stored top to bottom; pixel `(x, y)` lives at `y * width + x`
//! - Dimensions are the image's native pixel dimensions, never view size
//!
//! # Access
//!
//! Two flavours of accessor exist, as with most raster containers:
//!
//! - `get_pixel` / `set_pixel` return `Option` / `Result` for coordinates
//!   that may come from outside the crate
//! - `get_pixel_unchecked` / `set_pixel_unchecked` are still bounds-checked
//!   but panic on a bad coordinate; use them where an out-of-range access
//!   would be a bug

use crate::color::Rgba;
use crate::error::{Error, Result};

/// A rectangular grid of packed RGBA pixels.
///
/// # Examples
///
/// ```
/// use paintfill_core::{PixelBuffer, Rgba};
///
/// let mut buf = PixelBuffer::new(4, 3, Rgba::WHITE).unwrap();
/// buf.set_pixel(1, 2, Rgba::BLACK).unwrap();
/// assert_eq!(buf.get_pixel(1, 2), Some(Rgba::BLACK));
/// assert_eq!(buf.index_of(1, 2), Some(9));
/// assert_eq!(buf.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(PixelBuffer {
            width,
            height,
            data: vec![fill; len],
        })
    }

    /// Wrap existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Rgba>) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Rasterize interleaved 8-bit RGBA bytes (`r, g, b, a, r, g, ...`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if bytes.len() != expected * 4 {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: bytes.len() / 4,
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Interleaved 8-bit RGBA bytes, the inverse of [`Self::from_rgba_bytes`].
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.channels()).collect()
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; a buffer has at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether `(x, y)` lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Linear index of `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// `(x, y)` of a linear index, or `None` if out of bounds.
    #[inline]
    pub fn coords_of(&self, index: usize) -> Option<(u32, u32)> {
        (index < self.data.len()).then(|| {
            let w = self.width as usize;
            ((index % w) as u32, (index / w) as u32)
        })
    }

    /// Get a pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index_of(x, y).map(|i| self.data[i])
    }

    /// Get a pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        match self.index_of(x, y) {
            Some(i) => self.data[i],
            None => self.out_of_bounds(x, y),
        }
    }

    /// Set a pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        let i = self.index_of(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[i] = color;
        Ok(())
    }

    /// Set a pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, color: Rgba) {
        match self.index_of(x, y) {
            Some(i) => self.data[i] = color,
            None => self.out_of_bounds(x, y),
        }
    }

    /// Pixel at `row`, `col` (matrix order).
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: u32, col: u32) -> Rgba {
        self.get_pixel_unchecked(col, row)
    }

    /// Overwrite the pixel at `row`, `col` (matrix order).
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, row: u32, col: u32, color: Rgba) {
        self.set_pixel_unchecked(col, row, color);
    }

    #[cold]
    #[track_caller]
    fn out_of_bounds(&self, x: u32, y: u32) -> ! {
        panic!(
            "pixel ({}, {}) out of bounds for {}x{} buffer",
            x, y, self.width, self.height
        )
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[Rgba] {
        assert!(y < self.height, "row {} out of bounds", y);
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Rgba] {
        &self.data
    }

    /// Consume the buffer, returning its pixels in row-major order.
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.data
    }

    /// Count pixels exactly equal to `color`.
    pub fn count_matching(&self, color: Rgba) -> usize {
        self.data.iter().filter(|&&c| c == color).count()
    }

    /// Iterate over `(x, y, color)` for every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba)> + '_ {
        let w = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i as u32) % w, (i as u32) / w, c))
    }
}
