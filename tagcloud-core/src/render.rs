//! SVG rendering of a cloud, for inspection and the diagnostic dumps in tests.

use svg::Document;
use svg::node::element::{Circle, Rectangle};

use crate::layout::{PointI, RectI};

#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Outline color of every rectangle.
    pub stroke: String,
    pub fill: String,
    /// Empty margin around the cloud.
    pub padding: i32,
    /// Draw a dot at the cloud center.
    pub mark_center: bool,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "#000000".to_string(),
            fill: "none".to_string(),
            padding: 20,
            mark_center: true,
        }
    }
}

impl SvgStyle {
    pub fn with_stroke(stroke: impl Into<String>) -> Self {
        Self { stroke: stroke.into(), ..Default::default() }
    }
}

pub fn render_svg(center: PointI, rects: &[RectI], style: &SvgStyle) -> String {
    make_document(center, rects, style).to_string()
}

fn make_document(center: PointI, rects: &[RectI], style: &SvgStyle) -> Document {
    // Always include the center so an empty cloud still gets a sane viewBox.
    let area = rects
        .iter()
        .fold(RectI { x: center.x, y: center.y, w: 0, h: 0 }, |acc, r| acc.union(r));
    let pad = style.padding.max(0) as i64;

    // Widened so padding a cloud at the edge of the i32 range can't overflow.
    let mut document = Document::new().set(
        "viewBox",
        (area.x as i64 - pad, area.y as i64 - pad, area.w as i64 + 2 * pad, area.h as i64 + 2 * pad),
    );

    for r in rects {
        document = document.add(
            Rectangle::new()
                .set("fill", style.fill.as_str())
                .set("stroke", style.stroke.as_str())
                .set("x", r.x)
                .set("y", r.y)
                .set("width", r.w)
                .set("height", r.h),
        );
    }

    if style.mark_center {
        document = document.add(
            Circle::new()
                .set("fill", style.stroke.as_str())
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", 2),
        );
    }

    document
}
