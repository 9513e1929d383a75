#![cfg(not(all(target_arch = "wasm32", target_feature = "simd128")))]

use super::super::layout::BYTES_PER_PIXEL;

/// Invert R, G, B of every whole pixel in `pixels`.
#[inline]
pub(super) fn invert_rgb_run(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}
