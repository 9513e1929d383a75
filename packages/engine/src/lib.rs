//! Bleed Engine - grid storage and RGBA inversion for the image worker
//!
//! Layout:
//! - core/     - errors, console logging, indexing macros, timing
//! - spatial/  - contiguous 2D grids (int and bool cells)
//! - pixels/   - packed RGBA layout, inversion, settings, stats
//! - api/      - wasm-bindgen exports

// Macros (fast!, console_log!) must be declared before the modules using them.
#[macro_use]
pub mod core;
pub mod spatial;
pub mod pixels;
pub mod api;

// Short path to the grid module
pub use spatial::grid;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Bleed WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{PixelBuffer, WasmGrid};
pub use crate::core::Error;
pub use spatial::grid::{create_bool_grid, create_int_grid, BoolGrid, Grid, IntGrid};
pub use pixels::{invert, invert_with_settings, InvertSettings, InvertStats, PixelLayout, RgbaBuffer};
