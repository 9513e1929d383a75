//! RGB inversion
//!
//! Each of R, G, B becomes `255 - v`; alpha is left alone. Pixels are
//! disjoint, so rows can be handed to rayon in any order.
//!
//! Kernels:
//! - kernel_wasm32 - simd128 XOR, 4 pixels per step (wasm with simd128 enabled)
//! - kernel_scalar - everywhere else

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::perf_timer::PerfTimer;
use crate::core::Result;

use super::layout::PixelLayout;
use super::settings::InvertSettings;
use super::stats::InvertStats;

mod kernel_scalar;
mod kernel_wasm32;

#[cfg(not(all(target_arch = "wasm32", target_feature = "simd128")))]
use kernel_scalar::invert_rgb_run;
#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
use kernel_wasm32::invert_rgb_run;

/// Invert the RGB channels of a `width x height` RGBA buffer in place.
///
/// The buffer may be longer than the image; trailing bytes are untouched.
/// A buffer shorter than `width * height * 4` yields
/// [`Error::BufferTooSmall`](crate::core::Error::BufferTooSmall) and is left unmodified.
pub fn invert(buffer: &mut [u8], width: u32, height: u32) -> Result<()> {
    invert_with_settings(buffer, width, height, &InvertSettings::default()).map(|_| ())
}

/// [`invert`] with explicit settings, returning timing and counters.
pub fn invert_with_settings(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    settings: &InvertSettings,
) -> Result<InvertStats> {
    let layout = PixelLayout::for_buffer(width, height, buffer.len())?;
    Ok(invert_layout(buffer, &layout, settings))
}

/// Invert a buffer already validated against `layout`.
pub(crate) fn invert_layout(
    buffer: &mut [u8],
    layout: &PixelLayout,
    settings: &InvertSettings,
) -> InvertStats {
    debug_assert!(buffer.len() >= layout.byte_len());

    let timer = PerfTimer::start();
    let image = &mut buffer[..layout.byte_len()];

    let parallel = use_parallel(layout, settings);
    if !layout.is_empty() {
        if parallel {
            invert_rows_parallel(image, layout.row_bytes());
        } else {
            invert_rgb_run(image);
        }
    }

    let stats = InvertStats::new(timer.elapsed_ms(), layout, parallel);
    if settings.log_timings {
        console_log!(
            "invert {}x{}: {:.3} ms ({})",
            layout.width(),
            layout.height(),
            stats.invert_ms(),
            if parallel { "parallel" } else { "sequential" }
        );
    }
    stats
}

#[inline]
fn use_parallel(layout: &PixelLayout, settings: &InvertSettings) -> bool {
    #[cfg(feature = "parallel")]
    {
        settings.parallel && !layout.is_empty() && layout.height() >= settings.min_parallel_rows
    }
    #[cfg(not(feature = "parallel"))]
    {
        let _ = (layout, settings);
        false
    }
}

#[cfg(feature = "parallel")]
fn invert_rows_parallel(image: &mut [u8], row_bytes: usize) {
    image.par_chunks_mut(row_bytes).for_each(invert_rgb_run);
}

#[cfg(not(feature = "parallel"))]
fn invert_rows_parallel(image: &mut [u8], _row_bytes: usize) {
    invert_rgb_run(image);
}
