//! wasm-bindgen exports used by the image worker.
//!
//! Thin wrappers over `spatial::grid` and `pixels`; every `Error` crosses
//! the boundary as a thrown JS string.

use wasm_bindgen::prelude::*;

use crate::core::Error;

mod grid;
mod pixels;


pub use grid::{create_2d_array_bool, create_2d_array_int, free_2d_array, WasmGrid};
pub use pixels::{process_pixels, PixelBuffer};

#[inline]
fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
