//! Rectangle size suppliers for demos and tests.
//!
//! The generator owns its random source, so a seeded RNG gives a reproducible
//! sequence of sizes.

use rand::Rng;

use crate::error::LayoutError;
use crate::layout::SizeI;

pub struct SizeGenerator<R> {
    rng: R,
}

impl<R: Rng> SizeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// `count` sizes scaled from `max` by one random factor each, never below `min`.
    pub fn random_sizes(&mut self, count: usize, min: SizeI, max: SizeI) -> Result<Vec<SizeI>, LayoutError> {
        validate_range(min, max)?;
        let sizes = (0..count)
            .map(|_| {
                let t: f64 = self.rng.gen_range(0.0..1.0);
                SizeI {
                    w: min.w.max((t * max.w as f64) as i32),
                    h: min.h.max((t * max.h as f64) as i32),
                }
            })
            .collect();
        Ok(sizes)
    }

    /// Like [`random_sizes`](Self::random_sizes), largest area first.
    pub fn random_sizes_by_area(&mut self, count: usize, min: SizeI, max: SizeI) -> Result<Vec<SizeI>, LayoutError> {
        let mut sizes = self.random_sizes(count, min, max)?;
        sizes.sort_by_key(|s| std::cmp::Reverse(s.area()));
        Ok(sizes)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

pub fn constant_sizes(count: usize, size: SizeI) -> Vec<SizeI> {
    vec![size; count]
}

fn validate_range(min: SizeI, max: SizeI) -> Result<(), LayoutError> {
    if !min.is_positive() {
        return Err(LayoutError::InvalidSize(min));
    }
    if !max.is_positive() {
        return Err(LayoutError::InvalidSize(max));
    }
    if min.w > max.w || min.h > max.h {
        return Err(LayoutError::InvalidSizeRange { min, max });
    }
    Ok(())
}
