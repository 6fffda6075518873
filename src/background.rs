//! Background synthesis: palette noise, nearest-neighbor upscale, Gaussian blur.

use image::RgbImage;
use rand::Rng;

use crate::config::BackgroundOpts;
use crate::effects::blur::gaussian_blur_rgb8;
use crate::foundation::core::Size;
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::palette::Palette;

/// Smallest side of the reduced noise raster.
pub const MIN_NOISE_SIDE: u32 = 2;

/// Size of the reduced noise raster for a `target` background.
pub fn noise_dims(target: Size, noise_scale: f64) -> BackdropResult<Size> {
    validate_noise_scale(noise_scale)?;
    let side = |v: u32| {
        let scaled = (f64::from(v) * noise_scale).round() as u32;
        scaled.max(MIN_NOISE_SIDE)
    };
    Size::new(side(target.width), side(target.height))
}

/// Fill a `size` raster with independent uniform draws from `palette`.
pub fn sample_noise_field<R: Rng + ?Sized>(palette: &Palette, size: Size, rng: &mut R) -> RgbImage {
    let mut field = RgbImage::new(size.width, size.height);
    for px in field.pixels_mut() {
        *px = palette.sample(rng).into();
    }
    field
}

/// Synthesize a smooth `size` background from `palette`.
///
/// `blur_radius` is the Gaussian standard deviation in output pixels.
#[tracing::instrument(skip(palette, rng), fields(seed = %palette.seed()))]
pub fn synthesize_background<R: Rng + ?Sized>(
    palette: &Palette,
    size: (u32, u32),
    noise_scale: f64,
    blur_radius: f32,
    rng: &mut R,
) -> BackdropResult<RgbImage> {
    let target = Size::new(size.0, size.1)?;
    if !blur_radius.is_finite() || blur_radius < 0.0 {
        return Err(BackdropError::validation(format!(
            "blur_radius must be finite and >= 0, got {blur_radius}"
        )));
    }

    let reduced = noise_dims(target, noise_scale)?;
    tracing::debug!(noise = %reduced, target = %target, "sampling noise field");
    let noise = sample_noise_field(palette, reduced, rng);

    let upscaled = upscale_nearest(&noise, target);
    gaussian_blur_rgb8(&upscaled, blur_radius)
}

/// Nearest-neighbor resize of `src` to exactly `target`.
///
/// Destination pixel `x` reads source column `x * src_w / target_w`, so every source
/// pixel expands into a flat block.
pub fn upscale_nearest(src: &RgbImage, target: Size) -> RgbImage {
    let (sw, sh) = (u64::from(src.width()), u64::from(src.height()));
    let (tw, th) = (u64::from(target.width), u64::from(target.height));
    let cols: Vec<u32> = (0..tw).map(|x| (x * sw / tw) as u32).collect();
    RgbImage::from_fn(target.width, target.height, |x, y| {
        let sy = (u64::from(y) * sh / th) as u32;
        *src.get_pixel(cols[x as usize], sy)
    })
}

/// [`synthesize_background`] driven by [`BackgroundOpts`].
pub fn synthesize_with<R: Rng + ?Sized>(
    palette: &Palette,
    size: Size,
    opts: &BackgroundOpts,
    rng: &mut R,
) -> BackdropResult<RgbImage> {
    synthesize_background(
        palette,
        (size.width, size.height),
        opts.noise_scale,
        opts.blur_radius,
        rng,
    )
}

pub(crate) fn validate_noise_scale(noise_scale: f64) -> BackdropResult<()> {
    if !noise_scale.is_finite() || noise_scale <= 0.0 || noise_scale > 1.0 {
        return Err(BackdropError::validation(format!(
            "noise_scale must be in (0, 1], got {noise_scale}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/background/background.rs"]
mod tests;
