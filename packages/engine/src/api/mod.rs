//! Public JS-facing API.

pub mod wasm;
