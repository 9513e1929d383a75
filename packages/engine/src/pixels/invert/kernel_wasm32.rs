#![cfg(all(target_arch = "wasm32", target_feature = "simd128"))]

use std::arch::wasm32::*;

use super::super::layout::BYTES_PER_PIXEL;

/// Invert R, G, B of every whole pixel in `pixels`, 4 pixels per SIMD step.
///
/// For bytes `255 - v == v ^ 0xFF`, so one XOR with a mask that is zero in
/// the alpha lanes does the whole pixel group.
#[inline]
pub(super) fn invert_rgb_run(pixels: &mut [u8]) {
    let mask = u8x16(
        0xFF, 0xFF, 0xFF, 0x00,
        0xFF, 0xFF, 0xFF, 0x00,
        0xFF, 0xFF, 0xFF, 0x00,
        0xFF, 0xFF, 0xFF, 0x00,
    );

    let mut groups = pixels.chunks_exact_mut(4 * BYTES_PER_PIXEL);
    for group in &mut groups {
        let ptr = group.as_mut_ptr() as *mut v128;
        // SAFETY: `group` is exactly 16 bytes; v128 load/store are unaligned-safe.
        unsafe {
            let v = v128_load(ptr as *const v128);
            v128_store(ptr, v128_xor(v, mask));
        }
    }

    // Scalar remainder (0-3 pixels)
    for px in groups.into_remainder().chunks_exact_mut(BYTES_PER_PIXEL) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}
