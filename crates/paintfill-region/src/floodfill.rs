//! Tolerance-based scanline flood fill
//!
//! Recolors the 4-connected region around a seed pixel whose colors are
//! within a tolerance of the seed's original color. Opaque near-black
//! boundary pixels stop the fill.
//!
//! The fill alternates between two steps until its seed stack is empty:
//!
//! 1. **Span fill**: from a popped seed, recolor matching pixels to the left
//!    and right, giving the closed span `[left, right]` on the seed's row.
//! 2. **Neighbor scan**: for the rows directly above and below, claim the
//!    part of `[left, right]` not yet scanned (see [`crate::scanline`]) and
//!    push one seed per run of matching pixels, at the run's rightmost pixel.
//!
//! Matching is always against the seed's *original* color, not against the
//! neighbor a pixel was reached from, so colors cannot drift along a
//! gradient. Because the new color is never similar to the original (that
//! case is a no-op), a recolored pixel never matches again.

use crate::error::{RegionError, RegionResult};
use crate::scanline::{ScanTracker, Span, Unscanned};
use crate::stack::{SeedPoint, SeedStack};
use log::{debug, trace};
use paintfill_core::{DEFAULT_TOLERANCE, PixelBuffer, Rgba};

/// Options for flood fill operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOptions {
    /// Maximum per-channel difference from the seed's original color.
    /// Also sets the near-black threshold for boundary pixels.
    pub tolerance: u32,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl FillOptions {
    /// Create new options with the specified tolerance
    pub fn new(tolerance: u32) -> Self {
        Self { tolerance }
    }

    /// Set the tolerance
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Inclusive bounding box of the recolored pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl FillBounds {
    fn at(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include_span(&mut self, y: u32, span: Span) {
        self.min_x = self.min_x.min(span.left);
        self.max_x = self.max_x.max(span.right);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Counters describing one completed fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillStats {
    /// Pixels overwritten with the new color
    pub pixels_filled: usize,
    /// Seeds pushed, including the initial one
    pub seeds_pushed: usize,
    /// Seeds that started a span fill
    pub seeds_processed: usize,
    /// Seeds popped after their run had already been filled
    pub stale_seeds: usize,
    /// Largest seed stack depth
    pub max_stack_depth: usize,
    /// Rows that were scanned for seeds at least once
    pub rows_scanned: usize,
    /// Region that changed, for partial redisplay
    pub bounds: FillBounds,
}

/// What a fill did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The region was recolored.
    Filled(FillStats),
    /// The seed is a boundary pixel; nothing changed.
    SeedIsBoundary,
    /// The seed's color is already similar to the new color; nothing changed.
    AlreadyFilled,
}

impl FillOutcome {
    /// Number of pixels changed.
    pub fn pixels_filled(&self) -> usize {
        match self {
            FillOutcome::Filled(stats) => stats.pixels_filled,
            _ => 0,
        }
    }

    /// `true` if the buffer was left untouched.
    pub fn is_noop(&self) -> bool {
        !matches!(self, FillOutcome::Filled(_))
    }

    pub fn stats(&self) -> Option<&FillStats> {
        match self {
            FillOutcome::Filled(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Flood fill a region of an RGBA buffer in place
///
/// Starting at `seed`, recolors every pixel 4-connected to it whose color
/// is within `options.tolerance` of the seed's original color and which is
/// not a boundary pixel.
///
/// # Arguments
///
/// * `buffer` - Pixel buffer to modify
/// * `seed` - Start pixel, in buffer pixel coordinates
/// * `new_color` - Color written to every pixel of the region
/// * `options` - Fill options
///
/// # Returns
///
/// [`FillOutcome::SeedIsBoundary`] or [`FillOutcome::AlreadyFilled`] when
/// there is nothing to do, otherwise [`FillOutcome::Filled`] with counters.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed lies outside the
/// buffer. The buffer is not modified in that case.
///
/// # Examples
///
/// ```
/// use paintfill_core::{PixelBuffer, Rgba};
/// use paintfill_region::{FillOptions, SeedPoint, flood_fill};
///
/// let mut buf = PixelBuffer::new(10, 10, Rgba::WHITE).unwrap();
/// for y in 0..10 {
///     buf.set_pixel(4, y, Rgba::BLACK).unwrap();
/// }
/// let red = Rgba::rgb(255, 0, 0);
/// let outcome = flood_fill(&mut buf, SeedPoint::new(1, 1), red, &FillOptions::default()).unwrap();
/// assert_eq!(outcome.pixels_filled(), 40);
/// assert_eq!(buf.get_pixel(5, 5), Some(Rgba::WHITE));
/// ```
pub fn flood_fill(
    buffer: &mut PixelBuffer,
    seed: SeedPoint,
    new_color: Rgba,
    options: &FillOptions,
) -> RegionResult<FillOutcome> {
    let original = buffer
        .get_pixel(seed.x, seed.y)
        .ok_or(RegionError::InvalidSeed {
            x: seed.x,
            y: seed.y,
            width: buffer.width(),
            height: buffer.height(),
        })?;
    let tolerance = options.tolerance;

    if original.is_boundary(tolerance) {
        debug!(
            "seed ({}, {}) is a boundary pixel {:?}; nothing to fill",
            seed.x, seed.y, original
        );
        return Ok(FillOutcome::SeedIsBoundary);
    }
    if original.similar(new_color, tolerance) {
        debug!(
            "seed ({}, {}) color {:?} already matches {:?} within {}",
            seed.x, seed.y, original, new_color, tolerance
        );
        return Ok(FillOutcome::AlreadyFilled);
    }

    let stats = FillSession::new(buffer, seed, original, new_color, tolerance).run();
    debug!(
        "filled {} pixels from ({}, {}) with {}: {} seeds, {} stale, stack depth {}",
        stats.pixels_filled,
        seed.x,
        seed.y,
        new_color,
        stats.seeds_pushed,
        stats.stale_seeds,
        stats.max_stack_depth
    );
    Ok(FillOutcome::Filled(stats))
}

/// Flood fill and hand the buffer back
///
/// Consuming variant of [`flood_fill`] for callers that pass a freshly
/// rasterized buffer in and recompose an image from the one returned.
pub fn fill(
    mut buffer: PixelBuffer,
    seed: SeedPoint,
    new_color: Rgba,
    options: &FillOptions,
) -> RegionResult<PixelBuffer> {
    flood_fill(&mut buffer, seed, new_color, options)?;
    Ok(buffer)
}

/// Transient state of one fill. Dropped when the fill returns.
struct FillSession<'a> {
    buffer: &'a mut PixelBuffer,
    original: Rgba,
    new_color: Rgba,
    tolerance: u32,
    seeds: SeedStack,
    tracker: ScanTracker,
    stats: FillStats,
}

impl<'a> FillSession<'a> {
    /// A session with `seed` already on the stack.
    fn new(
        buffer: &'a mut PixelBuffer,
        seed: SeedPoint,
        original: Rgba,
        new_color: Rgba,
        tolerance: u32,
    ) -> Self {
        let height = buffer.height();
        let mut session = Self {
            buffer,
            original,
            new_color,
            tolerance,
            seeds: SeedStack::new(),
            tracker: ScanTracker::new(height),
            stats: FillStats {
                pixels_filled: 0,
                seeds_pushed: 0,
                seeds_processed: 0,
                stale_seeds: 0,
                max_stack_depth: 0,
                rows_scanned: 0,
                bounds: FillBounds::at(seed.x, seed.y),
            },
        };
        session.push(seed);
        session
    }

    fn run(mut self) -> FillStats {
        while let Some(p) = self.seeds.pop() {
            if !self.matches(p.x, p.y) {
                self.stats.stale_seeds += 1;
                continue;
            }
            self.stats.seeds_processed += 1;

            let span = self.fill_line(p);
            trace!("row {}: filled [{}, {}]", p.y, span.left, span.right);

            self.scan_line(p.y.checked_sub(1), span);
            self.scan_line(p.y.checked_add(1), span);
        }

        self.stats.max_stack_depth = self.seeds.high_water();
        self.stats.rows_scanned = self.tracker.tracked_rows();
        self.stats
    }

    /// Original-color match for a pixel that has not been filled yet.
    fn matches(&self, x: u32, y: u32) -> bool {
        let c = self.buffer.get_pixel_unchecked(x, y);
        c.similar(self.original, self.tolerance) && !c.is_boundary(self.tolerance)
    }

    fn paint(&mut self, x: u32, y: u32) {
        self.buffer.set_pixel_unchecked(x, y, self.new_color);
        self.stats.pixels_filled += 1;
    }

    fn push(&mut self, seed: SeedPoint) {
        self.seeds.push(seed);
        self.stats.seeds_pushed += 1;
    }

    /// Recolor the run through `seed` and return its columns.
    ///
    /// The seed pixel itself must match.
    fn fill_line(&mut self, seed: SeedPoint) -> Span {
        let y = seed.y;
        let width = self.buffer.width();

        self.paint(seed.x, y);

        let mut left = seed.x;
        while left > 0 && self.matches(left - 1, y) {
            left -= 1;
            self.paint(left, y);
        }

        let mut right = seed.x;
        while right + 1 < width && self.matches(right + 1, y) {
            right += 1;
            self.paint(right, y);
        }

        let span = Span::new(left, right);
        self.stats.bounds.include_span(y, span);
        span
    }

    /// Look for new seeds on `row` below or above a freshly filled span.
    fn scan_line(&mut self, row: Option<u32>, span: Span) {
        let Some(row) = row.filter(|&r| r < self.buffer.height()) else {
            return;
        };

        let claim = self.tracker.claim(row, span);
        if claim.is_empty() {
            return;
        }
        trace!(
            "row {}: {:?} against [{}, {}]",
            row, claim.relation, span.left, span.right
        );
        for part in claim.parts() {
            self.seed_part(row, part);
        }
    }

    /// Push one seed per run of matching pixels inside `part`.
    fn seed_part(&mut self, row: u32, part: Unscanned) {
        let Unscanned { span, join } = part;
        let mut x = span.left;

        while x <= span.right {
            if !self.matches(x, row) {
                x += 1;
                continue;
            }
            while x < span.right && self.matches(x + 1, row) {
                x += 1;
            }

            // A run running into the join column belongs to a seed that is
            // still pending as long as that column matches.
            let continues_into_scanned =
                x == span.right && join.is_some_and(|j| self.matches(j, row));
            if !continues_into_scanned {
                self.push(SeedPoint::new(x, row));
            }
            x += 1;
        }
    }
}
