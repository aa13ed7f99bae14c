//! Errors reported by the layouter and its collaborators.

use thiserror::Error;

use crate::layout::{PointI, SizeI};

/// Broad category of a [`LayoutError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value the operation cannot accept.
    InvalidArgument,
    /// The placement search gave up before finding a free spot.
    ResourceExhausted,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("scale factor must be a finite number more than zero, got {0}")]
    InvalidScaleFactor(f64),

    #[error("width and height of rectangle must be more than zero")]
    InvalidSize(SizeI),

    #[error("minimal size must not exceed maximal size")]
    InvalidSizeRange { min: SizeI, max: SizeI },

    #[error("a {}x{} rectangle centered at ({}, {}) does not fit in i32 coordinates", .size.w, .size.h, .center.x, .center.y)]
    OutOfRange { center: PointI, size: SizeI },

    #[error("invalid layout config: {0}")]
    InvalidConfig(&'static str),

    #[error("no free place for a {}x{} rectangle after {attempts} attempts", .size.w, .size.h)]
    PlacementExhausted { size: SizeI, attempts: usize },
}

impl LayoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LayoutError::PlacementExhausted { .. } => ErrorKind::ResourceExhausted,
            LayoutError::InvalidScaleFactor(_)
            | LayoutError::InvalidSize(_)
            | LayoutError::InvalidSizeRange { .. }
            | LayoutError::OutOfRange { .. }
            | LayoutError::InvalidConfig(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_message() {
        let e = LayoutError::InvalidSize(SizeI::new(0, 1));
        assert_eq!(e.to_string(), "width and height of rectangle must be more than zero");
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_exhausted_kind() {
        let e = LayoutError::PlacementExhausted { size: SizeI::new(3, 4), attempts: 10 };
        assert_eq!(e.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(e.to_string(), "no free place for a 3x4 rectangle after 10 attempts");
    }

    #[test]
    fn test_out_of_range_message() {
        let e = LayoutError::OutOfRange { center: PointI::new(i32::MAX, 0), size: SizeI::new(10, 2) };
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            e.to_string(),
            "a 10x2 rectangle centered at (2147483647, 0) does not fit in i32 coordinates"
        );
    }
}
