use wasm_bindgen::prelude::*;

use super::to_js;
use crate::spatial::grid::IntGrid;

/// Integer grid handle. Boolean grids use the same storage with 0/1 cells.
#[wasm_bindgen(js_name = Grid)]
pub struct WasmGrid {
    grid: IntGrid,
}

#[wasm_bindgen(js_class = Grid)]
impl WasmGrid {
    /// Allocate `height x width` cells set to `init`. Throws on non-positive sizes.
    #[wasm_bindgen(constructor)]
    pub fn new(height: i32, width: i32, init: i32) -> Result<WasmGrid, JsValue> {
        IntGrid::new(height, width, init)
            .map(|grid| Self { grid })
            .map_err(|e| {
                console_log!("grid allocation failed: {}", e);
                to_js(e)
            })
    }

    /// Boolean grid stored as 0/1 integers.
    #[wasm_bindgen(js_name = newBool)]
    pub fn new_bool(height: i32, width: i32, init: bool) -> Result<WasmGrid, JsValue> {
        Self::new(height, width, i32::from(init))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.grid.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.grid.height() }

    /// Cell count.
    pub fn len(&self) -> usize { self.grid.size() }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool { self.grid.size() == 0 }

    /// Pointer to the first cell in wasm memory (row-major `Int32Array` view).
    pub fn ptr(&self) -> *const i32 { self.grid.as_ptr() }

    pub fn get(&self, x: i32, y: i32) -> Option<i32> {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: i32, y: i32, value: i32) -> bool {
        self.grid.set(x, y, value)
    }

    pub fn fill(&mut self, value: i32) {
        self.grid.fill(value);
    }

    /// Free the storage. The JS handle is invalid afterwards.
    pub fn release(self) {
        self.grid.release();
    }
}

impl WasmGrid {
    pub fn as_grid(&self) -> &IntGrid {
        &self.grid
    }
}

#[wasm_bindgen(js_name = create2DArrayInt)]
pub fn create_2d_array_int(height: i32, width: i32, init: i32) -> Result<WasmGrid, JsValue> {
    WasmGrid::new(height, width, init)
}

#[wasm_bindgen(js_name = create2DArrayBool)]
pub fn create_2d_array_bool(height: i32, width: i32, init: bool) -> Result<WasmGrid, JsValue> {
    WasmGrid::new_bool(height, width, init)
}

/// Release a grid from either constructor.
#[wasm_bindgen(js_name = free2DArray)]
pub fn free_2d_array(grid: WasmGrid) {
    grid.release();
}
