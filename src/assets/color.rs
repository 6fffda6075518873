use rand::Rng;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BackdropError, BackdropResult};

/// Resolve a seed color string to RGB.
///
/// Accepts CSS color syntax: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `hsl(...)` and
/// named colors such as `rebeccapurple`. Any alpha component is discarded. Hex needs
/// its leading `#`, and `transparent` is not a seed.
pub fn parse_seed_color(s: &str) -> BackdropResult<Rgb8> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(BackdropError::invalid_color("seed color must be non-empty"));
    }
    if trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BackdropError::invalid_color(format!(
            "\"{trimmed}\": hex colors need a leading '#'"
        )));
    }
    if trimmed.eq_ignore_ascii_case("transparent") {
        return Err(BackdropError::invalid_color(
            "\"transparent\" has no color to seed from",
        ));
    }
    let color = csscolorparser::parse(trimmed)
        .map_err(|e| BackdropError::invalid_color(format!("\"{trimmed}\": {e}")))?;
    let [r, g, b, _a] = color.to_rgba8();
    Ok(Rgb8::new(r, g, b))
}

/// Uniformly random color over the full 24-bit space.
pub fn random_seed_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb8 {
    let v: u32 = rng.gen_range(0..=0x00FF_FFFF);
    Rgb8::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
