use super::*;

impl<T: Copy> Grid<T> {
    // === Cell access ===

    /// Cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<T> {
        if !self.in_bounds(x, y) { return None; }
        let idx = self.index(x as u32, y as u32);
        Some(*fast!(self.cells, [idx]))
    }

    /// Write `value` at `(x, y)`. Returns `false` (and writes nothing) outside the grid.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        if !self.in_bounds(x, y) { return false; }
        let idx = self.index(x as u32, y as u32);
        fast!(self.cells, [idx] = value);
        true
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> Option<T> {
        self.cells.get(idx).copied()
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    // === Rows ===

    pub fn row(&self, y: u32) -> Option<&[T]> {
        if y >= self.height { return None; }
        let start = self.index(0, y);
        Some(&self.cells[start..start + self.width as usize])
    }

    pub fn row_mut(&mut self, y: u32) -> Option<&mut [T]> {
        if y >= self.height { return None; }
        let start = self.index(0, y);
        let end = start + self.width as usize;
        Some(&mut self.cells[start..end])
    }

    /// Rows top to bottom, each exactly `width` cells.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.cells.chunks_exact(self.width as usize)
    }

    // === Raw storage ===
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.cells }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.cells }

    pub fn as_ptr(&self) -> *const T {
        self.cells.as_ptr()
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Number of cells equal to `value`.
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }
}
