use image::{GrayImage, Luma, RgbaImage};
use kurbo::{Point, RoundedRect, Shape};

/// Samples per axis used to estimate edge coverage.
const SUPERSAMPLE: u32 = 4;

/// Build a `width x height` opacity mask holding a filled rounded rectangle.
///
/// Pixels fully inside are 255, pixels fully outside are 0, and pixels crossed by a
/// corner arc get their fractional coverage. `radius` is clamped to half the shorter
/// side.
pub fn rounded_rect_mask(width: u32, height: u32, radius: f64) -> GrayImage {
    let mut mask = GrayImage::from_pixel(width, height, Luma([255]));
    if width == 0 || height == 0 {
        return mask;
    }

    let (w, h) = (f64::from(width), f64::from(height));
    let radius = radius.max(0.0).min(w.min(h) / 2.0);
    if radius <= 0.0 {
        return mask;
    }
    let shape = RoundedRect::new(0.0, 0.0, w, h, radius);

    // Only the four corner boxes can be partially covered.
    let reach = (radius.ceil() as u32).min(width).min(height);
    let xs = corner_span(width, reach);
    let ys = corner_span(height, reach);
    for &y in &ys {
        for &x in &xs {
            mask.put_pixel(x, y, Luma([coverage(&shape, x, y)]));
        }
    }
    mask
}

/// Replace the alpha channel of `img` with a rounded-rectangle mask.
#[tracing::instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn round_corners(img: &mut RgbaImage, radius: u32) {
    let mask = rounded_rect_mask(img.width(), img.height(), f64::from(radius));
    for (px, m) in img.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[0];
    }
}

fn corner_span(len: u32, reach: u32) -> Vec<u32> {
    let mut out: Vec<u32> = (0..reach).collect();
    out.extend((len.saturating_sub(reach)..len).filter(|v| *v >= reach));
    out
}

fn coverage(shape: &RoundedRect, x: u32, y: u32) -> u8 {
    let step = 1.0 / f64::from(SUPERSAMPLE);
    let mut hits = 0u32;
    for sy in 0..SUPERSAMPLE {
        for sx in 0..SUPERSAMPLE {
            let p = Point::new(
                f64::from(x) + (f64::from(sx) + 0.5) * step,
                f64::from(y) + (f64::from(sy) + 0.5) * step,
            );
            if shape.contains(p) {
                hits += 1;
            }
        }
    }
    let total = SUPERSAMPLE * SUPERSAMPLE;
    ((hits * 255 + total / 2) / total) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mask.rs"]
mod tests;
