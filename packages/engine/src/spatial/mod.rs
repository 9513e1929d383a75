//! Rectangular cell storage.

pub mod grid;
