//! Foreground compositing: round corners, size a background around the foreground,
//! blend, persist.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{DynamicImage, ImageFormat, RgbaImage};
use rand::Rng;

use crate::assets::color::parse_seed_color;
use crate::assets::decode::{ensure_exists, load_rgba};
use crate::background::synthesize_with;
use crate::config::CompositeOpts;
use crate::effects::blend::paste_over;
use crate::effects::mask::round_corners;
use crate::foundation::core::Size;
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::palette::Palette;

/// Border width for a `fg` foreground: `floor(min(w, h) * margin_pct)`.
///
/// Derived from the shorter side only, so extreme aspect ratios keep a thin border.
pub fn margin_for(fg: Size, margin_pct: f64) -> u32 {
    let short = f64::from(fg.width.min(fg.height));
    (short * margin_pct).floor().max(0.0) as u32
}

/// Composite `foreground` over a background synthesized from `palette`.
///
/// The foreground's corners are rounded in place of its alpha channel, then it is
/// alpha-blended at `(margin, margin)` onto a background `2 * margin` larger on each
/// axis.
#[tracing::instrument(skip(foreground, palette, opts, rng), fields(seed = %palette.seed()))]
pub fn compose<R: Rng + ?Sized>(
    mut foreground: RgbaImage,
    palette: &Palette,
    opts: &CompositeOpts,
    rng: &mut R,
) -> BackdropResult<RgbaImage> {
    opts.validate()?;
    let fg_size = Size::new(foreground.width(), foreground.height())?;

    round_corners(&mut foreground, opts.corner_radius);

    let margin = margin_for(fg_size, opts.margin_pct);
    let bg_size = fg_size.with_margin(margin)?;
    tracing::debug!(margin, background = %bg_size, "layout resolved");

    let background = synthesize_with(palette, bg_size, &opts.background, rng)?;
    let mut canvas = DynamicImage::ImageRgb8(background).into_rgba8();
    paste_over(&mut canvas, &foreground, margin, margin);
    Ok(canvas)
}

/// Load `foreground_path`, composite it over a background derived from `seed`, and
/// write the result to `output_path`.
///
/// Nothing is written unless every stage succeeds.
#[tracing::instrument(skip(opts, rng))]
pub fn composite<R: Rng + ?Sized>(
    foreground_path: &Path,
    output_path: &Path,
    seed: &str,
    opts: &CompositeOpts,
    rng: &mut R,
) -> BackdropResult<()> {
    ensure_exists(foreground_path)?;
    let palette = Palette::from_seed(parse_seed_color(seed)?);
    let format = output_format(output_path)?;

    let foreground = load_rgba(foreground_path)?;
    let out = compose(foreground, &palette, opts, rng)?;
    save_atomic(&out, output_path, format)?;

    tracing::info!(
        path = %output_path.display(),
        width = out.width(),
        height = out.height(),
        "composited image saved"
    );
    Ok(())
}

/// Lossless output format for `path`, chosen by extension. No extension means PNG.
pub fn output_format(path: &Path) -> BackdropResult<ImageFormat> {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return Ok(ImageFormat::Png);
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => Ok(ImageFormat::Png),
        "bmp" => Ok(ImageFormat::Bmp),
        "tif" | "tiff" => Ok(ImageFormat::Tiff),
        other => Err(BackdropError::validation(format!(
            "unsupported output format '{other}' (expected png, bmp or tiff)"
        ))),
    }
}

/// Encode `img` next to `path` and rename it into place.
pub fn save_atomic(img: &RgbaImage, path: &Path, format: ImageFormat) -> BackdropResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let tmp = tmp_sibling(path);
    let written = img
        .save_with_format(&tmp, format)
        .with_context(|| format!("write image '{}'", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, path)
                .with_context(|| format!("move '{}' into place", path.display()))
        });
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_owned());
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

#[cfg(test)]
#[path = "../tests/unit/composite/composite.rs"]
mod tests;
