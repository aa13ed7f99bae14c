//! Tag-cloud layout engine.
//!
//! Packs rectangles (one per word) into a compact, roughly circular cloud
//! around a fixed center by walking an Archimedean spiral outward and taking
//! the first spot that overlaps nothing placed so far.

pub mod error;
pub mod layout;
pub mod output;
pub mod render;
pub mod sizes;
mod wasm;

pub use error::{ErrorKind, LayoutError};
pub use layout::{ArchimedeanSpiral, CircularCloudLayouter, LayoutConfig, PointGenerator, PointI, RectI, SizeI};
pub use output::CloudOutput;
pub use render::{SvgStyle, render_svg};
pub use sizes::{SizeGenerator, constant_sizes};
pub use wasm::TagCloud;
