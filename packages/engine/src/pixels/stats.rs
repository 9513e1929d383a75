use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::layout::PixelLayout;

/// Timing and counters for one inversion.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct InvertStats {
    invert_ms: f64,
    width: u32,
    height: u32,
    pixels: usize,
    bytes: usize,
    parallel: bool,
}

impl InvertStats {
    pub(crate) fn new(invert_ms: f64, layout: &PixelLayout, parallel: bool) -> Self {
        Self {
            invert_ms,
            width: layout.width(),
            height: layout.height(),
            pixels: layout.pixel_count(),
            bytes: layout.byte_len(),
            parallel,
        }
    }
}

#[wasm_bindgen]
impl InvertStats {
    #[wasm_bindgen(getter)]
    pub fn invert_ms(&self) -> f64 { self.invert_ms }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.height }
    #[wasm_bindgen(getter)]
    pub fn pixels(&self) -> usize { self.pixels }
    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> usize { self.bytes }
    #[wasm_bindgen(getter)]
    pub fn parallel(&self) -> bool { self.parallel }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
