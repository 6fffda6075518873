use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{BackdropError, BackdropResult};

/// Fail with [`BackdropError::NotFound`] unless `path` exists.
pub fn ensure_exists(path: &Path) -> BackdropResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(BackdropError::not_found(path))
    }
}

/// Decode an image from memory into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> BackdropResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Load an image file into straight-alpha RGBA8.
#[tracing::instrument]
pub fn load_rgba(path: &Path) -> BackdropResult<RgbaImage> {
    ensure_exists(path)?;
    let dyn_img = image::ImageReader::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff image format '{}'", path.display()))?
        .decode()
        .with_context(|| format!("decode image '{}'", path.display()))?;
    let rgba = dyn_img.to_rgba8();
    tracing::debug!(width = rgba.width(), height = rgba.height(), "foreground decoded");
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
