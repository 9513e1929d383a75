//! Owned RGBA image storage.
//!
//! In the browser build this lives in wasm linear memory: the worker writes
//! decoded PNG bytes at `as_mut_ptr()` and inverts without copying.

use crate::core::{Error, Result};

use super::invert::invert_layout;
use super::layout::PixelLayout;
use super::settings::InvertSettings;
use super::stats::InvertStats;

pub struct RgbaBuffer {
    layout: PixelLayout,
    data: Vec<u8>,
    settings: InvertSettings,
    last_stats: InvertStats,
}

impl RgbaBuffer {
    /// Zeroed `width x height` image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let oom = Error::OutOfMemory { height, width };
        let layout = PixelLayout::new(width, height).ok_or_else(|| oom.clone())?;

        let mut data = Vec::new();
        data.try_reserve_exact(layout.byte_len()).map_err(|_| oom)?;
        data.resize(layout.byte_len(), 0);

        Ok(Self::with_layout(layout, data))
    }

    /// Take ownership of existing bytes. Extra bytes past the image are kept
    /// but never processed.
    pub fn from_vec(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let layout = PixelLayout::for_buffer(width, height, data.len())?;
        Ok(Self::with_layout(layout, data))
    }

    fn with_layout(layout: PixelLayout, data: Vec<u8>) -> Self {
        Self {
            layout,
            data,
            settings: InvertSettings::default(),
            last_stats: InvertStats::default(),
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.layout.width() }

    #[inline]
    pub fn height(&self) -> u32 { self.layout.height() }

    #[inline]
    pub fn layout(&self) -> &PixelLayout { &self.layout }

    /// Image size in bytes.
    #[inline]
    pub fn len(&self) -> usize { self.layout.byte_len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.layout.is_empty() }

    // === Bytes ===
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.layout.byte_len()]
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.layout.byte_len();
        &mut self.data[..len]
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.data.as_mut_ptr()
    }

    /// Copy the first `len()` bytes of `src` into the image.
    pub fn copy_from(&mut self, src: &[u8]) -> Result<()> {
        let len = self.layout.byte_len();
        if src.len() < len {
            return Err(Error::BufferTooSmall { needed: len, actual: src.len() });
        }
        self.data[..len].copy_from_slice(&src[..len]);
        Ok(())
    }

    /// RGBA of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.layout.offset(x, y)?;
        let px = &self.data[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    // === Settings ===
    pub fn settings(&self) -> &InvertSettings { &self.settings }

    pub fn set_settings(&mut self, settings: InvertSettings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<()> {
        self.settings = InvertSettings::from_json(json)?;
        console_log!("invert settings: {}", self.settings.to_json());
        Ok(())
    }

    // === Processing ===

    /// Invert RGB in place using this buffer's settings.
    pub fn invert(&mut self) -> InvertStats {
        self.last_stats = invert_layout(&mut self.data, &self.layout, &self.settings);
        self.last_stats
    }

    /// Stats of the most recent `invert`, zeroed before the first one.
    pub fn last_stats(&self) -> InvertStats {
        self.last_stats
    }
}
