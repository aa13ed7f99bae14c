// Circular tag-cloud layouter.
//
// Goals:
// - Deterministic: the same sequence of sizes always yields the same cloud
// - The first rectangle is centered exactly on the cloud center
// - No overlap between any two placed rectangles (touching edges is fine)
// - Compact, roughly circular silhouette
//
// Submodules:
// - spiral: Archimedean spiral candidate generator
// - spatial_grid: O(1) average overlap detection
// - compaction: pull freshly placed rectangles toward the center
// - circular: the placement loop tying the above together

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

mod circular;
mod compaction;
mod spatial_grid;
mod spiral;

pub use circular::CircularCloudLayouter;
pub use spiral::{ArchimedeanSpiral, PointGenerator};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

impl PointI {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeI {
    pub w: i32,
    pub h: i32,
}

impl SizeI {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Both dimensions strictly positive.
    pub fn is_positive(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl RectI {
    /// Build a rectangle whose edges all fit in `i32`, or `None` if they don't.
    pub fn checked(x: i64, y: i64, w: i32, h: i32) -> Option<RectI> {
        let fits = |lo: i64, len: i32| lo >= i32::MIN as i64 && lo + len as i64 <= i32::MAX as i64;
        if !(fits(x, w) && fits(y, h)) {
            return None;
        }
        Some(RectI { x: x as i32, y: y as i32, w, h })
    }

    /// Place a rectangle of `size` so that `center()` returns `center`.
    /// `None` if the result would not fit in `i32` coordinates.
    pub fn from_center(center: PointI, size: SizeI) -> Option<RectI> {
        RectI::checked(
            center.x as i64 - (size.w / 2) as i64,
            center.y as i64 - (size.h / 2) as i64,
            size.w,
            size.h,
        )
    }

    pub fn right(&self) -> i32 { self.x.saturating_add(self.w) }
    pub fn bottom(&self) -> i32 { self.y.saturating_add(self.h) }

    pub fn size(&self) -> SizeI {
        SizeI { w: self.w, h: self.h }
    }

    pub fn center(&self) -> PointI {
        PointI {
            x: self.x.saturating_add(self.w / 2),
            y: self.y.saturating_add(self.h / 2),
        }
    }

    /// Strict overlap: rectangles that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &RectI) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Bounding box of both. Width and height saturate at `i32::MAX`.
    pub fn union(&self, other: &RectI) -> RectI {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        let span = |lo: i32, hi: i32| (hi as i64 - lo as i64).min(i32::MAX as i64) as i32;
        RectI { x: x0, y: y0, w: span(x0, x1), h: span(y0, y1) }
    }
}

/// Finite and strictly positive.
pub(crate) fn is_valid_scale_factor(scale_factor: f64) -> bool {
    scale_factor.is_finite() && scale_factor > 0.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Spiral radius growth per radian.
    pub scale_factor: f64,
    /// Spiral points tried per rectangle before giving up.
    pub max_attempts: usize,
    /// Slide each new rectangle toward the center after it is placed.
    pub compact: bool,
    /// Cell size of the overlap grid. Roughly the size of a typical rectangle.
    pub grid_cell_size: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            max_attempts: 1_000_000,
            compact: true,
            grid_cell_size: 64,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !is_valid_scale_factor(self.scale_factor) {
            return Err(LayoutError::InvalidScaleFactor(self.scale_factor));
        }
        if self.max_attempts == 0 {
            return Err(LayoutError::InvalidConfig("max_attempts must be more than zero"));
        }
        if self.grid_cell_size <= 0 {
            return Err(LayoutError::InvalidConfig("grid_cell_size must be more than zero"));
        }
        Ok(())
    }
}
