use image::RgbaImage;

use crate::foundation::math::mul_div255_u8;

/// Blend straight-alpha `src` over straight-alpha `dst` with its top-left corner at
/// `(x, y)`. The source's own alpha channel is the blend mask; parts of `src` that fall
/// outside `dst` are dropped.
#[tracing::instrument(skip(dst, src), fields(src_w = src.width(), src_h = src.height()))]
pub fn paste_over(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    let (dw, dh) = dst.dimensions();
    if x >= dw || y >= dh {
        return;
    }
    let w = src.width().min(dw - x);
    let h = src.height().min(dh - y);

    for row in 0..h {
        for col in 0..w {
            let s = src.get_pixel(col, row).0;
            let d = dst.get_pixel_mut(x + col, y + row);
            d.0 = source_over(d.0, s);
        }
    }
}

/// Source-over of two straight-alpha pixels, computed in premultiplied space.
fn source_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3];
    match sa {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255 - u16::from(sa);
    let da = mul_div255_u8(u16::from(dst[3]), inv);
    let out_a = sa.saturating_add(da);
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    out[3] = out_a;
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), u16::from(sa));
        let dc = mul_div255_u8(u16::from(dst[i]), u16::from(da));
        let premul = u32::from(sc.saturating_add(dc));
        let a = u32::from(out_a);
        out[i] = ((premul * 255 + a / 2) / a).min(255) as u8;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
