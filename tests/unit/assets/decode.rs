use std::io::Cursor;
use std::path::PathBuf;

use super::*;

#[test]
fn decode_image_png_keeps_straight_alpha() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba.clone()).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.as_raw(), &src_rgba);
}

#[test]
fn decode_rgb_source_becomes_opaque_rgba() {
    let img = image::RgbImage::from_pixel(2, 1, image::Rgb([1, 2, 3]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.get_pixel(1, 0).0, [1, 2, 3, 255]);
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(decode_image(b"definitely not an image").is_err());
}

#[test]
fn load_missing_file_is_not_found() {
    let path = PathBuf::from("target").join("unit_decode").join("missing.png");
    let err = load_rgba(&path).unwrap_err();
    assert!(matches!(err, BackdropError::NotFound(p) if p == path));
}
