//! Grid - contiguous row-major cell storage
//!
//! One `Vec<T>` of `height * width` cells instead of a vector of row vectors:
//! rows never alias, there is a single allocation to free, and the grid
//! carries its own dimensions so release can never be handed a wrong height.
//!
//! Integer and boolean grids share this one type (`IntGrid`, `BoolGrid`).

use crate::core::{Error, Result};

mod indexing;
mod accessors;


/// Grid of `i32` cells.
pub type IntGrid = Grid<i32>;

/// Grid of boolean cells.
pub type BoolGrid = Grid<bool>;

/// Row-major grid of `Copy` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Allocate `height` rows of `width` cells, every cell set to `init`.
    ///
    /// Non-positive dimensions are rejected with [`Error::InvalidDimensions`].
    /// A cell count or byte size that overflows, or an allocator refusal,
    /// yields [`Error::OutOfMemory`].
    pub fn new(height: i32, width: i32, init: T) -> Result<Self> {
        if height <= 0 || width <= 0 {
            return Err(Error::InvalidDimensions {
                height: height as i64,
                width: width as i64,
            });
        }

        let height = height as u32;
        let width = width as u32;
        let oom = Error::OutOfMemory { height, width };

        let size = (height as usize)
            .checked_mul(width as usize)
            .ok_or_else(|| oom.clone())?;

        // try_reserve_exact also rejects byte sizes above isize::MAX
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| oom)?;
        cells.resize(size, init);

        Ok(Self { width, height, size, cells })
    }

    /// Free the grid's storage.
    ///
    /// Consuming `self` means a grid is released exactly once.
    pub fn release(self) {
        drop(self.cells);
    }
}

/// Allocate an integer grid.
pub fn create_int_grid(height: i32, width: i32, init: i32) -> Result<IntGrid> {
    Grid::new(height, width, init)
}

/// Allocate a boolean grid.
pub fn create_bool_grid(height: i32, width: i32, init: bool) -> Result<BoolGrid> {
    Grid::new(height, width, init)
}
