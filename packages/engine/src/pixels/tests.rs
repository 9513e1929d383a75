use super::*;
use crate::core::Error;

fn gradient(width: u32, height: u32) -> Vec<u8> {
    (0..(width * height * 4) as usize).map(|i| (i * 7 % 256) as u8).collect()
}

#[test]
fn single_pixel_inverts_rgb_keeps_alpha() {
    let mut buf = vec![10, 20, 30, 40];
    invert(&mut buf, 1, 1).unwrap();
    assert_eq!(buf, vec![245, 235, 225, 40]);
}

#[test]
fn black_and_white_pair_swaps() {
    let mut buf = vec![0, 0, 0, 255, 255, 255, 255, 0];
    invert(&mut buf, 2, 1).unwrap();
    assert_eq!(buf, vec![255, 255, 255, 255, 0, 0, 0, 0]);
}

#[test]
fn short_buffer_is_rejected_untouched() {
    let mut buf = vec![1, 2, 3, 4, 5, 6, 7];
    let err = invert(&mut buf, 2, 1).unwrap_err();
    assert_eq!(err, Error::BufferTooSmall { needed: 8, actual: 7 });
    assert_eq!(buf, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn overflowing_dimensions_are_rejected() {
    let mut buf = vec![0u8; 16];
    let err = invert(&mut buf, u32::MAX, u32::MAX);
    // 64-bit: (2^32-1)^2 * 4 overflows usize; 32-bit overflows earlier
    assert_eq!(err, Err(Error::BufferTooSmall { needed: usize::MAX, actual: 16 }));
}

#[test]
fn trailing_bytes_are_not_touched() {
    let mut buf = vec![0, 0, 0, 0, 9, 9, 9];
    invert(&mut buf, 1, 1).unwrap();
    assert_eq!(buf, vec![255, 255, 255, 0, 9, 9, 9]);
}

#[test]
fn empty_image_is_a_no_op() {
    let mut buf = vec![5u8; 4];
    invert(&mut buf, 0, 3).unwrap();
    invert(&mut buf, 3, 0).unwrap();
    assert_eq!(buf, vec![5, 5, 5, 5]);

    let mut empty: Vec<u8> = Vec::new();
    invert(&mut empty, 0, 0).unwrap();
}

#[test]
fn double_inversion_restores_original() {
    let original = gradient(13, 9);
    let mut buf = original.clone();
    invert(&mut buf, 13, 9).unwrap();
    assert_ne!(buf, original);
    invert(&mut buf, 13, 9).unwrap();
    assert_eq!(buf, original);
}

#[test]
fn parallel_and_sequential_agree() {
    let original = gradient(37, 71);

    let mut seq = original.clone();
    let seq_stats = invert_with_settings(&mut seq, 37, 71, &InvertSettings::sequential()).unwrap();
    assert!(!seq_stats.parallel());

    let mut par = original.clone();
    let eager = InvertSettings { parallel: true, min_parallel_rows: 1, log_timings: true };
    let par_stats = invert_with_settings(&mut par, 37, 71, &eager).unwrap();
    assert_eq!(par_stats.parallel(), cfg!(feature = "parallel"));

    assert_eq!(seq, par);
}

#[test]
fn short_images_stay_sequential() {
    let mut buf = gradient(8, 4);
    let settings = InvertSettings { min_parallel_rows: 5, ..InvertSettings::default() };
    let stats = invert_with_settings(&mut buf, 8, 4, &settings).unwrap();
    assert!(!stats.parallel());
}

#[test]
fn stats_report_image_size() {
    let mut buf = gradient(6, 5);
    let stats = invert_with_settings(&mut buf, 6, 5, &InvertSettings::default()).unwrap();
    assert_eq!(stats.width(), 6);
    assert_eq!(stats.height(), 5);
    assert_eq!(stats.pixels(), 30);
    assert_eq!(stats.bytes(), 120);
    assert!(stats.invert_ms() >= 0.0);
    assert!(stats.to_json().contains("\"pixels\":30"));
}

#[test]
fn layout_offsets_follow_row_major_order() {
    let layout = PixelLayout::new(3, 2).unwrap();
    assert_eq!(layout.byte_len(), 24);
    assert_eq!(layout.row_bytes(), 12);
    assert_eq!(layout.offset(0, 0), Some(0));
    assert_eq!(layout.offset(2, 1), Some(20));
    assert_eq!(layout.offset(3, 0), None);
    assert_eq!(layout.offset(0, 2), None);
}

#[test]
fn rgba_buffer_inverts_in_place() {
    let mut image = RgbaBuffer::new(2, 2).unwrap();
    assert_eq!(image.len(), 16);
    assert!(image.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(image.last_stats(), InvertStats::default());

    let src: Vec<u8> = (0..16).collect();
    image.copy_from(&src).unwrap();
    let stats = image.invert();

    assert_eq!(stats.pixels(), 4);
    assert_eq!(image.last_stats(), stats);
    assert_eq!(image.pixel(1, 1), Some([255 - 12, 255 - 13, 255 - 14, 15]));
    assert_eq!(image.pixel(2, 0), None);
}

#[test]
fn rgba_buffer_rejects_short_source() {
    let mut image = RgbaBuffer::new(2, 1).unwrap();
    assert_eq!(
        image.copy_from(&[1, 2, 3]),
        Err(Error::BufferTooSmall { needed: 8, actual: 3 })
    );
    assert!(RgbaBuffer::from_vec(vec![0; 7], 2, 1).is_err());
}

#[test]
fn rgba_buffer_keeps_extra_bytes() {
    let mut image = RgbaBuffer::from_vec(vec![1, 2, 3, 4, 42], 1, 1).unwrap();
    image.invert();
    assert_eq!(image.as_bytes(), &[254, 253, 252, 4]);
    assert_eq!(image.into_vec(), vec![254, 253, 252, 4, 42]);
}

#[test]
fn rgba_buffer_settings_are_validated() {
    let mut image = RgbaBuffer::new(1, 1).unwrap();
    image.load_settings_json(r#"{"parallel": false}"#).unwrap();
    assert!(!image.settings().parallel);

    let bad = InvertSettings { min_parallel_rows: 0, ..InvertSettings::default() };
    assert!(image.set_settings(bad).is_err());
    assert!(image.load_settings_json("{").is_err());
    assert!(!image.settings().parallel);
}

#[test]
fn oversized_rgba_buffer_reports_out_of_memory() {
    let result = RgbaBuffer::new(u32::MAX, u32::MAX);
    assert!(matches!(result, Err(Error::OutOfMemory { .. })));
}
