//! Crate error type.
//!
//! Every failure here is local to one call and recoverable by the caller.
//! The wasm layer turns these into `JsValue` strings via `Display`.

use std::fmt;

/// Errors from grid allocation and pixel processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Height or width is zero or negative.
    InvalidDimensions { height: i64, width: i64 },
    /// The allocator could not provide `height * width` cells, or the size overflowed.
    OutOfMemory { height: u32, width: u32 },
    /// Pixel buffer is shorter than `width * height * 4` bytes.
    /// `needed` saturates at `usize::MAX` when the size itself overflows.
    BufferTooSmall { needed: usize, actual: usize },
    /// Settings JSON failed to parse or holds an unusable value.
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { height, width } => {
                write!(f, "invalid grid dimensions {}x{} (height x width must be positive)", height, width)
            }
            Self::OutOfMemory { height, width } => {
                write!(f, "out of memory allocating {}x{} grid", height, width)
            }
            Self::BufferTooSmall { needed, actual } => {
                if *needed == usize::MAX {
                    write!(f, "pixel buffer too small: image size overflows ({} bytes given)", actual)
                } else {
                    write!(f, "pixel buffer too small: need {} bytes, got {}", needed, actual)
                }
            }
            Self::InvalidSettings(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
