//! Core plumbing shared by the grid and pixel modules.
//!
//! - utils/       - zero-cost indexing macros
//! - error        - crate error type
//! - console      - console/log routing
//! - perf_timer   - wall-clock timing for wasm and native

#[macro_use]
pub mod utils;
#[macro_use]
pub mod console;
pub mod error;
pub(crate) mod perf_timer;

pub use error::{Error, Result};
