// Circular cloud placement.
//
// Each new rectangle walks the spiral outward from where the previous search
// stopped and takes the first candidate that overlaps nothing already placed.
// The spiral is never rewound, so the search always terminates as long as the
// attempt budget is large enough.

use tracing::{debug, warn};

use super::compaction::pull_toward_center;
use super::spatial_grid::SpatialGrid;
use super::spiral::{ArchimedeanSpiral, PointGenerator};
use super::{LayoutConfig, PointI, RectI, SizeI};
use crate::error::LayoutError;
use crate::output::CloudOutput;

#[derive(Debug, Clone)]
pub struct CircularCloudLayouter<G = ArchimedeanSpiral> {
    center: PointI,
    points: G,
    placed: SpatialGrid,
    max_attempts: usize,
    compact: bool,
}

impl CircularCloudLayouter<ArchimedeanSpiral> {
    pub fn new(center: PointI) -> Self {
        let cfg = LayoutConfig::default();
        Self {
            center,
            points: ArchimedeanSpiral::new(center),
            placed: SpatialGrid::new(cfg.grid_cell_size),
            max_attempts: cfg.max_attempts,
            compact: cfg.compact,
        }
    }

    pub fn with_config(center: PointI, cfg: &LayoutConfig) -> Result<Self, LayoutError> {
        cfg.validate()?;
        let spiral = ArchimedeanSpiral::with_scale_factor(center, cfg.scale_factor)?;
        Ok(Self::with_generator(center, spiral, cfg))
    }
}

impl<G: PointGenerator> CircularCloudLayouter<G> {
    /// Use a custom candidate source. `cfg.scale_factor` is ignored.
    pub fn with_generator(center: PointI, points: G, cfg: &LayoutConfig) -> Self {
        Self {
            center,
            points,
            placed: SpatialGrid::new(cfg.grid_cell_size),
            max_attempts: cfg.max_attempts.max(1),
            compact: cfg.compact,
        }
    }

    pub fn center(&self) -> PointI {
        self.center
    }

    /// Placed rectangles, in placement order.
    pub fn rectangles(&self) -> &[RectI] {
        self.placed.rects()
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Smallest rectangle containing every placement.
    pub fn bounds(&self) -> Option<RectI> {
        self.rectangles().iter().copied().reduce(|acc, r| acc.union(&r))
    }

    pub fn snapshot(&self) -> CloudOutput {
        CloudOutput {
            center: self.center,
            bounds: self.bounds(),
            rectangles: self.rectangles().to_vec(),
        }
    }

    pub fn put_next_rectangle(&mut self, size: SizeI) -> Result<RectI, LayoutError> {
        if !size.is_positive() {
            return Err(LayoutError::InvalidSize(size));
        }

        if self.placed.is_empty() {
            let rect = RectI::from_center(self.center, size)
                .ok_or(LayoutError::OutOfRange { center: self.center, size })?;
            debug!(?size, ?rect, "placed first rectangle at the center");
            self.placed.insert(rect);
            return Ok(rect);
        }

        let (rect, attempts) = self.find_free_spot(size)?;
        let rect = if self.compact {
            pull_toward_center(rect, self.center, &self.placed)
        } else {
            rect
        };

        debug!(?size, ?rect, attempts, "placed rectangle");
        self.placed.insert(rect);
        Ok(rect)
    }

    fn find_free_spot(&mut self, size: SizeI) -> Result<(RectI, usize), LayoutError> {
        for attempt in 1..=self.max_attempts {
            // Points outside i32 range, and rectangles that would spill past it, are never free.
            let Some(candidate) = self.points.next_point().and_then(|p| RectI::from_center(p, size)) else {
                continue;
            };
            if !self.placed.overlaps_any(&candidate) {
                return Ok((candidate, attempt));
            }
        }
        warn!(?size, attempts = self.max_attempts, placed = self.len(), "no free place found");
        Err(LayoutError::PlacementExhausted { size, attempts: self.max_attempts })
    }
}
