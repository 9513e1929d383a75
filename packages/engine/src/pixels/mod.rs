//! Packed RGBA pixel processing.
//!
//! Buffers are `width * height` pixels of 4 bytes (R, G, B, A), row-major,
//! no row padding. Bytes past the image are never touched.

pub mod layout;
pub mod invert;
pub mod settings;
pub mod stats;
pub mod buffer;

#[cfg(test)]
mod tests;

pub use buffer::RgbaBuffer;
pub use invert::{invert, invert_with_settings};
pub use layout::{PixelLayout, ALPHA_CHANNEL, BYTES_PER_PIXEL};
pub use settings::InvertSettings;
pub use stats::InvertStats;
