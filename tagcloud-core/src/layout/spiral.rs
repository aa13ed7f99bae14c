// Archimedean spiral candidate generator.
//
// Produces an infinite, deterministic stream of integer points on the curve
// r = scale_factor * angle, walking outward from a center one degree at a time.
// The radius never shrinks, so a search along this stream eventually reaches
// any distance from the center.

use std::f64::consts::PI;

use super::{PointI, is_valid_scale_factor};
use crate::error::LayoutError;

/// Angle advanced per generated point (one degree).
const ANGLE_STEP: f64 = PI / 180.0;

/// Source of candidate positions for the layouter.
pub trait PointGenerator {
    /// Next candidate, or `None` when this step lands outside `i32` coordinates.
    fn next_point(&mut self) -> Option<PointI>;
}

#[derive(Debug, Clone)]
pub struct ArchimedeanSpiral {
    center: PointI,
    scale_factor: f64,
    /// Current angle in radians. Only ever grows.
    angle: f64,
}

impl ArchimedeanSpiral {
    pub fn new(center: PointI) -> Self {
        Self { center, scale_factor: 1.0, angle: 0.0 }
    }

    pub fn with_scale_factor(center: PointI, scale_factor: f64) -> Result<Self, LayoutError> {
        if !is_valid_scale_factor(scale_factor) {
            return Err(LayoutError::InvalidScaleFactor(scale_factor));
        }
        Ok(Self { center, scale_factor, angle: 0.0 })
    }

    pub fn center(&self) -> PointI {
        self.center
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn radius(&self) -> f64 {
        self.scale_factor * self.angle
    }
}

impl PointGenerator for ArchimedeanSpiral {
    /// Advance one step, then return the point at the new angle.
    /// The offset from the center is truncated toward zero.
    fn next_point(&mut self) -> Option<PointI> {
        self.angle += ANGLE_STEP;
        let r = self.radius();
        let x = offset(self.center.x, r * self.angle.cos())?;
        let y = offset(self.center.y, r * self.angle.sin())?;
        Some(PointI { x, y })
    }
}

/// `base + trunc(delta)`, if that is a valid `i32`.
fn offset(base: i32, delta: f64) -> Option<i32> {
    let v = base as f64 + delta.trunc();
    (v.is_finite() && v >= i32::MIN as f64 && v <= i32::MAX as f64).then_some(v as i32)
}

/// Ends at the first point that does not fit in `i32` coordinates.
impl Iterator for ArchimedeanSpiral {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        self.next_point()
    }
}
