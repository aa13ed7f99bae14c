// Pull a freshly placed rectangle toward the cloud center.
//
// The spiral only finds *some* free spot; sliding the result along each axis
// until it hits a neighbour (or lines up with the center) closes the gaps the
// coarse spiral steps leave behind.

use tracing::trace;

use super::spatial_grid::SpatialGrid;
use super::{PointI, RectI};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Slide `rect` toward `center`, alternating X and Y, until neither axis moves.
/// `rect` must not overlap anything in `grid`; the result doesn't either.
pub fn pull_toward_center(rect: RectI, center: PointI, grid: &SpatialGrid) -> RectI {
    let mut rect = rect;
    loop {
        let mut moved = false;
        for axis in [Axis::X, Axis::Y] {
            let next = slide(rect, center, axis, grid);
            if next != rect {
                trace!(?axis, from = ?rect, to = ?next, "compacted");
                rect = next;
                moved = true;
            }
        }
        if !moved {
            return rect;
        }
    }
}

/// `rect` moved by `d` along `axis`, if it still fits in `i32` coordinates.
fn shifted(rect: RectI, axis: Axis, d: i64) -> Option<RectI> {
    let (x, y) = (rect.x as i64, rect.y as i64);
    match axis {
        Axis::X => RectI::checked(x + d, y, rect.w, rect.h),
        Axis::Y => RectI::checked(x, y + d, rect.w, rect.h),
    }
}

/// Move along one axis toward the center coordinate, stopping at the first obstacle.
fn slide(rect: RectI, center: PointI, axis: Axis, grid: &SpatialGrid) -> RectI {
    let c = rect.center();
    let wanted = match axis {
        Axis::X => center.x as i64 - c.x as i64,
        Axis::Y => center.y as i64 - c.y as i64,
    };
    if wanted == 0 {
        return rect;
    }
    let Some(target) = shifted(rect, axis, wanted) else {
        return rect;
    };

    // Everything the rectangle would sweep over on its way.
    let swept = rect.union(&target);

    let mut dist = wanted.abs();
    for other in grid.query(&swept) {
        if let Some(gap) = gap_ahead(&rect, &other, axis, wanted.signum()) {
            dist = dist.min(gap);
        }
    }

    shifted(rect, axis, dist * wanted.signum()).unwrap_or(rect)
}

/// Free distance between `rect` and `other` when moving in direction `dir` along `axis`,
/// or `None` if `other` is not in the way.
fn gap_ahead(rect: &RectI, other: &RectI, axis: Axis, dir: i64) -> Option<i64> {
    let (lo, hi, olo, ohi, cross) = match axis {
        Axis::X => (
            rect.x,
            rect.right(),
            other.x,
            other.right(),
            rect.y < other.bottom() && other.y < rect.bottom(),
        ),
        Axis::Y => (
            rect.y,
            rect.bottom(),
            other.y,
            other.bottom(),
            rect.x < other.right() && other.x < rect.right(),
        ),
    };
    if !cross {
        return None;
    }
    if dir < 0 && ohi <= lo {
        Some(lo as i64 - ohi as i64)
    } else if dir > 0 && olo >= hi {
        Some(olo as i64 - hi as i64)
    } else {
        None
    }
}
