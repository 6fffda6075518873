use super::*;

#[test]
fn blur_sigma_0_is_identity() {
    let img = RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 40, y as u8 * 90, 7]));
    let out = gaussian_blur_rgb8(&img, 0.0).unwrap();
    assert_eq!(out, img);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (4u32, 3u32);
    let px = [10u8, 20u8, 30u8];
    let src = px.repeat((w * h) as usize);
    let out = blur_rgb8(&src, w, h, 2.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (5u32, 5u32);
    let mut src = vec![0u8; (w * h * 3) as usize];
    let center = ((2 * w + 2) * 3) as usize;
    src[center..center + 3].copy_from_slice(&[255, 255, 255]);

    let out = blur_rgb8(&src, w, h, 0.6).unwrap();

    let nonzero = out.chunks_exact(3).filter(|px| px[0] != 0).count();
    assert!(nonzero > 1);

    let sum_r: u32 = out.chunks_exact(3).map(|px| u32::from(px[0])).sum();
    assert!((sum_r as i32 - 255).abs() <= 4);
}

#[test]
fn box_widths_are_odd_and_track_sigma() {
    assert_eq!(box_widths(0.6), [1, 1, 3]);
    assert_eq!(box_widths(4.0), [7, 7, 9]);
    for w in box_widths(50.0) {
        assert_eq!(w % 2, 1);
        assert!((99..=101).contains(&w));
    }
}

#[test]
fn box_line_clamps_at_both_edges() {
    // One red channel line: 0, 0, 90 with a 3-wide box.
    let src = [0u8, 0, 0, 0, 0, 0, 90, 0, 0];
    let mut dst = [0u8; 9];
    box_line(&src, &mut dst, 0, 3, 3, 1);
    assert_eq!([dst[0], dst[3], dst[6]], [0, 30, 60]);
}

#[test]
fn blur_rejects_bad_sigma_and_mismatched_buffers() {
    let img = RgbImage::new(2, 2);
    assert!(gaussian_blur_rgb8(&img, -1.0).is_err());
    assert!(gaussian_blur_rgb8(&img, f32::NAN).is_err());
    assert!(gaussian_blur_rgb8(&img, f32::INFINITY).is_err());
    assert!(blur_rgb8(&[0u8; 5], 2, 1, 1.0).is_err());
}

#[test]
fn blur_keeps_dimensions_when_kernel_exceeds_image() {
    let img = RgbImage::from_fn(3, 5, |x, _| image::Rgb([if x == 0 { 255 } else { 0 }, 0, 0]));
    let out = gaussian_blur_rgb8(&img, 10.0).unwrap();
    assert_eq!(out.dimensions(), (3, 5));
}

#[test]
fn huge_sigma_is_capped_instead_of_overflowing() {
    let img = RgbImage::from_fn(4, 4, |x, y| image::Rgb([(x * 60) as u8, (y * 60) as u8, 9]));
    for sigma in [1.0e9, f32::MAX] {
        let out = gaussian_blur_rgb8(&img, sigma).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out, gaussian_blur_rgb8(&img, 4.0).unwrap());
    }
}
