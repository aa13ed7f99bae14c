//! Output types for downstream consumers (renderers, the JS frontend).
//!
//! These structs are serialized to JSON as-is.

use serde::Serialize;

use crate::layout::{PointI, RectI};

/// A finished (or in-progress) cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudOutput {
    pub center: PointI,
    /// Union of all rectangles; absent while the cloud is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<RectI>,
    /// Placements in the order they were made.
    pub rectangles: Vec<RectI>,
}

/// Error information for the JS side
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub kind: &'static str,
    pub message: String,
}
