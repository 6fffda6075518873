use image::RgbImage;

use crate::foundation::error::{BackdropError, BackdropResult};

/// Box passes per axis; three boxes are within a few percent of a true Gaussian.
const PASSES: usize = 3;

/// Gaussian blur with standard deviation `sigma`, sampling clamped to the edges.
///
/// Approximated by three running-sum box filters per axis, so the cost per pixel does
/// not depend on `sigma`. `sigma` is capped at the longer image side; past that the
/// field is already flat. `sigma == 0` returns a copy.
#[tracing::instrument(skip(src), fields(width = src.width(), height = src.height()))]
pub fn gaussian_blur_rgb8(src: &RgbImage, sigma: f32) -> BackdropResult<RgbImage> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(BackdropError::validation(format!(
            "blur radius must be finite and >= 0, got {sigma}"
        )));
    }
    let (width, height) = src.dimensions();
    let out = blur_rgb8(src.as_raw(), width, height, f64::from(sigma))?;
    RgbImage::from_raw(width, height, out)
        .ok_or_else(|| BackdropError::validation("blurred buffer does not match image size"))
}

fn blur_rgb8(src: &[u8], width: u32, height: u32, sigma: f64) -> BackdropResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(3))
        .ok_or_else(|| BackdropError::invalid_dimensions("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(BackdropError::validation(
            "blur expects src matching width*height*3",
        ));
    }
    let sigma = sigma.min(f64::from(width.max(height)));
    if sigma <= 0.0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let widths = box_widths(sigma);
    tracing::debug!(?widths, "box widths chosen");

    let (w, h) = (width as usize, height as usize);
    let mut cur = src.to_vec();
    let mut next = vec![0u8; expected_len];
    for &bw in &widths {
        let r = (bw - 1) / 2;
        if r == 0 {
            continue;
        }
        for y in 0..h {
            box_line(&cur, &mut next, y * w * 3, 3, w, r);
        }
        std::mem::swap(&mut cur, &mut next);
        for x in 0..w {
            box_line(&cur, &mut next, x * 3, w * 3, h, r);
        }
        std::mem::swap(&mut cur, &mut next);
    }
    Ok(cur)
}

/// Odd box widths whose cascade has variance `sigma^2`.
fn box_widths(sigma: f64) -> [u64; PASSES] {
    let n = PASSES as f64;
    let var12 = 12.0 * sigma * sigma;
    let ideal = (var12 / n + 1.0).sqrt();
    let mut lo = ideal.floor() as u64;
    if lo % 2 == 0 {
        lo -= 1;
    }
    let lo_f = lo as f64;
    let small = ((var12 - n * lo_f * lo_f - 4.0 * n * lo_f - 3.0 * n) / (-4.0 * lo_f - 4.0))
        .round()
        .clamp(0.0, n) as usize;
    std::array::from_fn(|i| if i < small { lo } else { lo + 2 })
}

/// Running-sum box filter of half-width `r` along one line of `len` RGB pixels that
/// starts at byte `start` and advances `stride` bytes per pixel.
fn box_line(src: &[u8], dst: &mut [u8], start: usize, stride: usize, len: usize, r: u64) {
    let last = len as i64 - 1;
    let at = |i: i64| start + (i.clamp(0, last) as usize) * stride;
    let window = 2 * r + 1;
    let ri = r as i64;

    for c in 0..3 {
        // Window [-r, r] at x = 0 with clamped indices.
        let first = u64::from(src[at(0) + c]);
        let edge = u64::from(src[at(last) + c]);
        let inner = r.min(last as u64);
        let mut sum = r * first + (r - inner) * edge;
        for k in 0..=inner as i64 {
            sum += u64::from(src[at(k) + c]);
        }

        for x in 0..=last {
            dst[at(x) + c] = ((sum + window / 2) / window) as u8;
            sum += u64::from(src[at(x + ri + 1) + c]);
            sum -= u64::from(src[at(x - ri) + c]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
