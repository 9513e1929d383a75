use crate::core::{Error, Result};

/// Bytes per packed RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte offset of alpha within a pixel.
pub const ALPHA_CHANNEL: usize = 3;

/// Image dimensions with their byte size computed once, overflow-checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelLayout {
    width: u32,
    height: u32,
    byte_len: usize,
}

impl PixelLayout {
    /// `None` when `width * height * 4` does not fit in `usize`.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let byte_len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(BYTES_PER_PIXEL)?;
        Some(Self { width, height, byte_len })
    }

    /// Layout for a caller-supplied buffer of `len` bytes.
    ///
    /// Fails with [`Error::BufferTooSmall`] if the buffer cannot hold the image.
    pub fn for_buffer(width: u32, height: u32, len: usize) -> Result<Self> {
        let layout = Self::new(width, height)
            .ok_or(Error::BufferTooSmall { needed: usize::MAX, actual: len })?;
        if len < layout.byte_len {
            return Err(Error::BufferTooSmall { needed: layout.byte_len, actual: len });
        }
        Ok(layout)
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Bytes covered by the image.
    #[inline]
    pub fn byte_len(&self) -> usize { self.byte_len }

    #[inline]
    pub fn pixel_count(&self) -> usize { self.byte_len / BYTES_PER_PIXEL }

    #[inline]
    pub fn row_bytes(&self) -> usize { self.width as usize * BYTES_PER_PIXEL }

    #[inline]
    pub fn is_empty(&self) -> bool { self.byte_len == 0 }

    /// Byte offset of pixel `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height { return None; }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL)
    }
}
