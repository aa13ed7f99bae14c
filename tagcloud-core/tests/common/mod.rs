//! Shared test helpers.

use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use tagcloud_core::{CircularCloudLayouter, RectI, SvgStyle, render_svg};

/// Owns a layouter for the duration of a test. If the test panics while the
/// guard is alive, the current cloud is rendered to an SVG file and its path
/// is printed.
pub struct LayoutDiagnostics {
    name: &'static str,
    layouter: CircularCloudLayouter,
}

impl LayoutDiagnostics {
    pub fn new(name: &'static str, layouter: CircularCloudLayouter) -> Self {
        Self { name, layouter }
    }

    fn save(&self) -> std::io::Result<PathBuf> {
        let svg = render_svg(
            self.layouter.center(),
            self.layouter.rectangles(),
            &SvgStyle::with_stroke("black"),
        );
        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}-", self.name))
            .suffix(".svg")
            .tempfile()?;
        file.write_all(svg.as_bytes())?;
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

impl Deref for LayoutDiagnostics {
    type Target = CircularCloudLayouter;

    fn deref(&self) -> &Self::Target {
        &self.layouter
    }
}

impl DerefMut for LayoutDiagnostics {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layouter
    }
}

impl Drop for LayoutDiagnostics {
    fn drop(&mut self) {
        if !std::thread::panicking() || self.layouter.is_empty() {
            return;
        }
        match self.save() {
            Ok(path) => eprintln!("Tag cloud visualization saved to file {}", path.display()),
            Err(e) => eprintln!("Could not save tag cloud visualization: {e}"),
        }
    }
}

pub fn intersecting_pair(rects: &[RectI]) -> Option<(RectI, RectI)> {
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            if a.overlaps(b) {
                return Some((*a, *b));
            }
        }
    }
    None
}
