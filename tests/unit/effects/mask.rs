use super::*;

#[test]
fn corners_are_transparent_and_center_is_opaque() {
    let mask = rounded_rect_mask(100, 60, 20.0);
    for (x, y) in [(0, 0), (99, 0), (0, 59), (99, 59)] {
        assert_eq!(mask.get_pixel(x, y).0[0], 0, "corner ({x},{y})");
    }
    assert_eq!(mask.get_pixel(50, 30).0[0], 255);
    // Straight edges between the arcs stay fully covered.
    assert_eq!(mask.get_pixel(50, 0).0[0], 255);
    assert_eq!(mask.get_pixel(0, 30).0[0], 255);
}

#[test]
fn arc_pixels_get_partial_coverage() {
    let mask = rounded_rect_mask(100, 100, 20.0);
    let partial = mask
        .pixels()
        .filter(|p| p.0[0] != 0 && p.0[0] != 255)
        .count();
    assert!(partial > 0);
}

#[test]
fn mask_is_symmetric() {
    let (w, h) = (41u32, 23u32);
    let mask = rounded_rect_mask(w, h, 9.0);
    for y in 0..h {
        for x in 0..w {
            let v = mask.get_pixel(x, y).0[0];
            assert_eq!(v, mask.get_pixel(w - 1 - x, y).0[0]);
            assert_eq!(v, mask.get_pixel(x, h - 1 - y).0[0]);
        }
    }
}

#[test]
fn zero_radius_is_fully_opaque() {
    let mask = rounded_rect_mask(8, 5, 0.0);
    assert!(mask.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn oversized_radius_is_clamped() {
    let mask = rounded_rect_mask(10, 10, 500.0);
    assert_eq!(mask.get_pixel(0, 0).0[0], 0);
    assert_eq!(mask.get_pixel(5, 5).0[0], 255);
}

#[test]
fn round_corners_replaces_alpha() {
    let mut img = RgbaImage::from_pixel(50, 50, image::Rgba([10, 20, 30, 77]));
    round_corners(&mut img, 10);
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 0]);
    assert_eq!(img.get_pixel(25, 25).0, [10, 20, 30, 255]);
}
