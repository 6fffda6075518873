use std::fmt;

use crate::foundation::error::{BackdropError, BackdropResult};

/// Straight 8-bit RGB color. This is the single in-memory color representation;
/// hex strings only appear at serialization boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Near-black used as the palette's contrast anchor.
    pub const NEAR_BLACK: Self = Self::new(10, 10, 10);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`, truncating toward zero and saturating at
    /// `[0, 255]`.
    pub fn scale(self, factor: f64) -> Self {
        fn ch(c: u8, factor: f64) -> u8 {
            let v = (f64::from(c) * factor).trunc();
            if v.is_nan() {
                return 0;
            }
            v.clamp(0.0, 255.0) as u8
        }

        Self {
            r: ch(self.r, factor),
            g: ch(self.g, factor),
            b: ch(self.b, factor),
        }
    }

    /// Channels as an array, in `[r, g, b]` order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb(c.to_array())
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Raster dimensions in pixels. Both sides are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a validated size.
    pub fn new(width: u32, height: u32) -> BackdropResult<Self> {
        if width == 0 || height == 0 {
            return Err(BackdropError::invalid_dimensions(format!(
                "{width}x{height} has a zero side"
            )));
        }
        Ok(Self { width, height })
    }

    /// Grow both sides by `margin` on each edge.
    pub fn with_margin(self, margin: u32) -> BackdropResult<Self> {
        let grow = |v: u32| {
            margin
                .checked_mul(2)
                .and_then(|m| v.checked_add(m))
                .ok_or_else(|| BackdropError::invalid_dimensions("size overflow adding margin"))
        };
        Ok(Self {
            width: grow(self.width)?,
            height: grow(self.height)?,
        })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
