//! WASM bindings for the tagcloud-core library.
//!
//! Everything exposed to JavaScript via wasm-bindgen is defined here.

use wasm_bindgen::prelude::*;

use crate::error::{ErrorKind, LayoutError};
use crate::layout::{CircularCloudLayouter, LayoutConfig, PointI, SizeI};
use crate::output::ErrorInfo;
use crate::render::{SvgStyle, render_svg};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn to_js_error(e: &LayoutError) -> JsError {
    let info = ErrorInfo {
        kind: match e.kind() {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::ResourceExhausted => "resource_exhausted",
        },
        message: e.to_string(),
    };
    let json = serde_json::to_string(&info).unwrap_or_else(|_| info.message.clone());
    console_error(&json);
    JsError::new(&json)
}

/// A cloud being built one rectangle at a time.
#[wasm_bindgen]
pub struct TagCloud {
    layouter: CircularCloudLayouter,
}

#[wasm_bindgen]
impl TagCloud {
    #[wasm_bindgen(constructor)]
    pub fn new(x: i32, y: i32) -> TagCloud {
        TagCloud { layouter: CircularCloudLayouter::new(PointI { x, y }) }
    }

    /// `config_json` may be partial, missing fields take their defaults.
    pub fn with_config(x: i32, y: i32, config_json: &str) -> Result<TagCloud, JsError> {
        let cfg: LayoutConfig = serde_json::from_str(config_json).map_err(|e| {
            console_error(&format!("Error parsing layout config: {:?}", e));
            JsError::new(&e.to_string())
        })?;
        let layouter = CircularCloudLayouter::with_config(PointI { x, y }, &cfg).map_err(|e| to_js_error(&e))?;
        Ok(TagCloud { layouter })
    }

    /// Place the next rectangle and return it as JSON.
    pub fn put_next_rectangle(&mut self, w: i32, h: i32) -> Result<String, JsError> {
        let rect = self
            .layouter
            .put_next_rectangle(SizeI { w, h })
            .map_err(|e| to_js_error(&e))?;
        serde_json::to_string(&rect).map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.layouter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouter.is_empty()
    }

    pub fn to_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.layouter.snapshot()).map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn to_svg(&self, color: &str) -> String {
        render_svg(self.layouter.center(), self.layouter.rectangles(), &SvgStyle::with_stroke(color))
    }
}
