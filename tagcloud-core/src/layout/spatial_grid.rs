// Spatial hash grid for overlap detection.
//
// Owns the placed rectangles in insertion order and buckets their indices by
// cell, so a candidate is only compared against rectangles sharing a cell with it.
// Rectangles covering more than a handful of cells skip the buckets: they are
// kept in a plain list that every query scans, and a large query rectangle is
// checked against everything directly. Either way the cost per check stays
// independent of rectangle area.

use std::collections::{HashMap, HashSet};

use super::RectI;

/// Rectangles spanning more cells than this are not bucketed.
const MAX_CELLS: i64 = 16;

/// Inclusive range of cell coordinates covered by a rectangle.
#[derive(Debug, Copy, Clone)]
struct CellSpan {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl CellSpan {
    fn count(&self) -> i64 {
        (self.max_x as i64 - self.min_x as i64 + 1) * (self.max_y as i64 - self.min_y as i64 + 1)
    }

    fn is_large(&self) -> bool {
        self.count() > MAX_CELLS
    }

    fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (self.min_x..=self.max_x).flat_map(move |cx| (self.min_y..=self.max_y).map(move |cy| (cx, cy)))
    }
}

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: i32,
    /// Every inserted rectangle, in insertion order.
    rects: Vec<RectI>,
    /// Cell coordinates -> indices into `rects`.
    cells: HashMap<(i32, i32), Vec<usize>>,
    /// Indices of rectangles too large to bucket.
    large: Vec<usize>,
}

impl SpatialGrid {
    /// Cell size should be roughly the size of a typical rectangle.
    pub fn new(cell_size: i32) -> Self {
        Self {
            cell_size: cell_size.max(1),
            rects: Vec::new(),
            cells: HashMap::new(),
            large: Vec::new(),
        }
    }

    pub fn rects(&self) -> &[RectI] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    fn cell_span(&self, rect: &RectI) -> CellSpan {
        CellSpan {
            min_x: rect.x.div_euclid(self.cell_size),
            max_x: rect.right().saturating_sub(1).div_euclid(self.cell_size),
            min_y: rect.y.div_euclid(self.cell_size),
            max_y: rect.bottom().saturating_sub(1).div_euclid(self.cell_size),
        }
    }

    pub fn insert(&mut self, rect: RectI) {
        let idx = self.rects.len();
        self.rects.push(rect);
        let span = self.cell_span(&rect);
        if span.is_large() {
            self.large.push(idx);
            return;
        }
        for cell in span.cells() {
            self.cells.entry(cell).or_default().push(idx);
        }
    }

    /// Rectangles that may overlap `rect`, each reported once.
    /// May include rectangles that do not actually overlap it.
    pub fn query(&self, rect: &RectI) -> Vec<RectI> {
        let span = self.cell_span(rect);
        if span.is_large() {
            return self.rects.clone();
        }
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        let bucketed = span.cells().filter_map(|cell| self.cells.get(&cell)).flatten();
        for &i in bucketed.chain(&self.large) {
            if seen.insert(i) {
                result.push(self.rects[i]);
            }
        }
        result
    }

    /// Check if `rect` overlaps any inserted rectangle.
    pub fn overlaps_any(&self, rect: &RectI) -> bool {
        let span = self.cell_span(rect);
        if span.is_large() {
            return self.rects.iter().any(|r| r.overlaps(rect));
        }
        let hit = |i: &usize| self.rects[*i].overlaps(rect);
        self.large.iter().any(hit)
            || span
                .cells()
                .filter_map(|cell| self.cells.get(&cell))
                .any(|indices| indices.iter().any(hit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query() {
        let mut grid = SpatialGrid::new(100);
        let r1 = RectI { x: 0, y: 0, w: 50, h: 50 };
        let r2 = RectI { x: 200, y: 200, w: 50, h: 50 };

        grid.insert(r1);
        grid.insert(r2);

        let nearby = grid.query(&RectI { x: 10, y: 10, w: 20, h: 20 });
        assert!(nearby.contains(&r1));
        assert!(!nearby.contains(&r2));
        assert_eq!(grid.rects(), &[r1, r2]);
    }

    #[test]
    fn test_query_reports_each_rect_once() {
        let mut grid = SpatialGrid::new(10);
        let big = RectI { x: -25, y: -25, w: 50, h: 50 };
        grid.insert(big);
        assert_eq!(grid.query(&RectI { x: -30, y: -30, w: 60, h: 60 }), vec![big]);
    }

    #[test]
    fn test_overlaps_any() {
        let mut grid = SpatialGrid::new(100);
        grid.insert(RectI { x: 0, y: 0, w: 50, h: 50 });

        assert!(grid.overlaps_any(&RectI { x: 25, y: 25, w: 50, h: 50 }));
        assert!(!grid.overlaps_any(&RectI { x: 100, y: 100, w: 50, h: 50 }));
        // Shares an edge and a cell, but does not overlap.
        assert!(!grid.overlaps_any(&RectI { x: 50, y: 0, w: 10, h: 10 }));
    }

    #[test]
    fn test_large_rects_are_not_bucketed() {
        let mut grid = SpatialGrid::new(64);
        grid.insert(RectI { x: -100_000, y: -100_000, w: 200_000, h: 200_000 });
        assert!(grid.cells.is_empty());
        assert_eq!(grid.large, vec![0]);

        // Small queries still see it.
        assert!(grid.overlaps_any(&RectI { x: 5, y: 5, w: 10, h: 10 }));
        assert!(!grid.overlaps_any(&RectI { x: 100_000, y: 0, w: 10, h: 10 }));
        assert_eq!(grid.query(&RectI { x: 5, y: 5, w: 10, h: 10 }).len(), 1);
    }

    #[test]
    fn test_large_query_against_small_rects() {
        let mut grid = SpatialGrid::new(16);
        let small = RectI { x: 500, y: 500, w: 4, h: 4 };
        grid.insert(small);
        assert!(!grid.cells.is_empty());

        let big = RectI { x: 0, y: 0, w: 10_000, h: 10_000 };
        assert!(grid.overlaps_any(&big));
        assert_eq!(grid.query(&big), vec![small]);
        assert!(!grid.overlaps_any(&RectI { x: 504, y: 0, w: 10_000, h: 10_000 }));
    }

    #[test]
    fn test_rects_at_i32_edges() {
        let mut grid = SpatialGrid::new(64);
        let edge = RectI { x: i32::MAX - 10, y: i32::MIN, w: 10, h: 10 };
        grid.insert(edge);
        assert!(grid.overlaps_any(&RectI { x: i32::MAX - 5, y: i32::MIN, w: 5, h: 5 }));
        assert_eq!(grid.rects(), &[edge]);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = SpatialGrid::new(64);
        grid.insert(RectI { x: -100, y: -100, w: 30, h: 30 });
        assert!(grid.overlaps_any(&RectI { x: -80, y: -80, w: 5, h: 5 }));
        assert!(!grid.overlaps_any(&RectI { x: -70, y: -70, w: 5, h: 5 }));
    }
}
