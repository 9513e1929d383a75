use wasm_bindgen::prelude::*;

use super::to_js;
use crate::pixels::{self, InvertStats, RgbaBuffer};

/// RGBA image in wasm memory.
///
/// The worker writes decoded pixels through a `Uint8Array` over
/// `memory.buffer` at `ptr()`, calls `invert()`, and reads the same view back.
#[wasm_bindgen]
pub struct PixelBuffer {
    image: RgbaBuffer,
}

#[wasm_bindgen]
impl PixelBuffer {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<PixelBuffer, JsValue> {
        let image = RgbaBuffer::new(width, height).map_err(to_js)?;
        Ok(Self { image })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.image.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.image.height() }

    /// Image size in bytes.
    pub fn len(&self) -> usize { self.image.len() }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool { self.image.is_empty() }

    pub fn ptr(&mut self) -> *mut u8 { self.image.as_mut_ptr() }

    #[wasm_bindgen(js_name = copyFrom)]
    pub fn copy_from(&mut self, data: &[u8]) -> Result<(), JsValue> {
        self.image.copy_from(data).map_err(to_js)
    }

    #[wasm_bindgen(js_name = toVec)]
    pub fn to_vec(&self) -> Vec<u8> {
        self.image.as_bytes().to_vec()
    }

    #[wasm_bindgen(js_name = setSettingsJson)]
    pub fn set_settings_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.image.load_settings_json(json).map_err(to_js)
    }

    #[wasm_bindgen(js_name = settingsJson)]
    pub fn settings_json(&self) -> String {
        self.image.settings().to_json()
    }

    pub fn invert(&mut self) -> InvertStats {
        self.image.invert()
    }

    #[wasm_bindgen(js_name = lastStats)]
    pub fn last_stats(&self) -> InvertStats {
        self.image.last_stats()
    }
}

impl PixelBuffer {
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }
}

/// Invert a JS-owned RGBA `Uint8Array` in place. Throws if it is shorter
/// than `width * height * 4`.
#[wasm_bindgen]
pub fn process_pixels(data: &mut [u8], width: u32, height: u32) -> Result<(), JsValue> {
    pixels::invert(data, width, height).map_err(to_js)
}
