//! Packed RGBA color values
//!
//! # Pixel format
//!
//! Colors are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
//!
//! # Tolerance
//!
//! Two helpers drive the fill engine:
//!
//! - [`Rgba::similar`]: every channel within `tolerance` of the other color
//! - [`Rgba::is_boundary`]: an opaque near-black pixel, which a fill never
//!   enters or overwrites

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when the caller does not pick one.
pub const DEFAULT_TOLERANCE: u32 = 20;

/// Red channel (MSB, byte 0)
pub const RED: usize = 0;
/// Green channel (byte 1)
pub const GREEN: usize = 1;
/// Blue channel (byte 2)
pub const BLUE: usize = 2;
/// Alpha channel (LSB, byte 3)
pub const ALPHA: usize = 3;

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// A 32-bit RGBA color.
///
/// # Examples
///
/// ```
/// use paintfill_core::Rgba;
///
/// let white = Rgba::rgb(255, 255, 255);
/// assert_eq!(white.packed(), 0xffffffff);
/// assert!(white.similar(Rgba::rgb(240, 250, 255), 20));
/// assert!(Rgba::BLACK.is_boundary(20));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(u32);

impl Rgba {
    /// Opaque black, the canonical boundary color.
    pub const BLACK: Rgba = Rgba(0x0000_00ff);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba(0xffff_ffff);
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba(0);

    /// Compose a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba(
            ((r as u32) << RED_SHIFT)
                | ((g as u32) << GREEN_SHIFT)
                | ((b as u32) << BLUE_SHIFT)
                | ((a as u32) << ALPHA_SHIFT),
        )
    }

    /// Compose an opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Wrap an already packed `0xRRGGBBAA` word.
    #[inline]
    pub const fn from_packed(pixel: u32) -> Self {
        Rgba(pixel)
    }

    /// The packed `0xRRGGBBAA` word.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> RED_SHIFT) & 0xff) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> GREEN_SHIFT) & 0xff) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        ((self.0 >> BLUE_SHIFT) & 0xff) as u8
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        ((self.0 >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Channels in `[RED, GREEN, BLUE, ALPHA]` order.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Check whether two colors are the same within `tolerance`.
    ///
    /// Exact equality always matches. Otherwise the absolute difference
    /// of every channel, alpha included, must be at most `tolerance`.
    /// The relation is symmetric and reflexive but not transitive.
    pub fn similar(self, other: Rgba, tolerance: u32) -> bool {
        if self == other {
            return true;
        }
        self.channels()
            .iter()
            .zip(other.channels())
            .all(|(&a, b)| u32::from(a.abs_diff(b)) <= tolerance)
    }

    /// Check whether this is a boundary pixel for the given tolerance.
    ///
    /// A boundary pixel is opaque and near black: red, green and blue are
    /// each below `tolerance` and alpha is above `255 - tolerance`. With a
    /// tolerance of 0 no pixel is a boundary.
    pub fn is_boundary(self, tolerance: u32) -> bool {
        let t = i64::from(tolerance);
        i64::from(self.red()) < t
            && i64::from(self.green()) < t
            && i64::from(self.blue()) < t
            && i64::from(self.alpha()) > 255 - t
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rgba({}, {}, {}, {})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        c.channels()
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if (hex.len() != 6 && hex.len() != 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(format!(
                "expected #RRGGBB or #RRGGBBAA, got '{}'",
                s
            )));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| Error::InvalidColor(format!("'{}': {}", s, e)))?;
        Ok(if hex.len() == 6 {
            Rgba((value << 8) | 0xff)
        } else {
            Rgba(value)
        })
    }
}
