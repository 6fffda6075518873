//! Palette generation from a single seed color.
//!
//! The palette is the sampling alphabet for background noise. Its eight entries are
//! drawn with equal probability, so the seed (listed twice) is the most common color.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::assets::color::parse_seed_color;
use crate::foundation::core::Rgb8;
use crate::foundation::error::BackdropResult;

/// Number of entries in every palette.
pub const PALETTE_LEN: usize = 8;

const BRIGHTEN: [f64; 2] = [1.5, 1.2];
const DARKEN: [f64; 2] = [0.8, 0.6];

/// Fixed-size ordered set of colors derived from one seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: [Rgb8; PALETTE_LEN],
}

impl Palette {
    /// Derive the palette for an already resolved seed color.
    pub fn from_seed(seed: Rgb8) -> Self {
        Self {
            colors: [
                seed,
                seed,
                seed.scale(BRIGHTEN[0]),
                seed.scale(BRIGHTEN[1]),
                seed.scale(DARKEN[0]),
                seed.scale(DARKEN[1]),
                Rgb8::NEAR_BLACK,
                Rgb8::WHITE,
            ],
        }
    }

    /// The seed color this palette was derived from.
    pub fn seed(&self) -> Rgb8 {
        self.colors[0]
    }

    /// All entries in palette order.
    pub fn colors(&self) -> &[Rgb8; PALETTE_LEN] {
        &self.colors
    }

    /// Whether `c` is one of the entries.
    pub fn contains(&self, c: Rgb8) -> bool {
        self.colors.contains(&c)
    }

    /// Uniform draw with replacement.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb8 {
        // Never empty, so `choose` always yields.
        self.colors.choose(rng).copied().unwrap_or(self.colors[0])
    }

    /// Entries as `#rrggbb` strings, in palette order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

/// Resolve `seed` and derive its palette.
///
/// Fails with [`crate::BackdropError::InvalidColor`] when `seed` is not a color.
pub fn generate_palette(seed: &str) -> BackdropResult<Palette> {
    Ok(Palette::from_seed(parse_seed_color(seed)?))
}

#[cfg(test)]
#[path = "../tests/unit/palette/palette.rs"]
mod tests;
