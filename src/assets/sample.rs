use image::DynamicImage;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BackdropError, BackdropResult};

/// Mean RGB of the top half of `img` (rows `0..height / 2`), ignoring alpha.
///
/// Each channel mean is truncated toward zero.
pub fn average_top_half_color(img: &DynamicImage) -> BackdropResult<Rgb8> {
    let (width, height) = (img.width(), img.height());
    let rows = height / 2;
    if width == 0 || rows == 0 {
        return Err(BackdropError::invalid_dimensions(format!(
            "cannot sample the top half of a {width}x{height} image"
        )));
    }

    let rgb = img.crop_imm(0, 0, width, rows).to_rgb8();
    let mut sum = [0u64; 3];
    for px in rgb.pixels() {
        for (acc, &c) in sum.iter_mut().zip(px.0.iter()) {
            *acc += u64::from(c);
        }
    }
    let n = u64::from(width) * u64::from(rows);
    let avg = sum.map(|s| (s / n) as u8);
    Ok(Rgb8::from(avg))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sample.rs"]
mod tests;
