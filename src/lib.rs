//! Backdrop composites screenshots onto procedurally blended color backgrounds.
//!
//! # Pipeline overview
//!
//! 1. **Palette**: one seed color -> eight derived colors ([`generate_palette`])
//! 2. **Background**: palette noise, nearest-neighbor upscale, Gaussian blur
//!    ([`synthesize_background`])
//! 3. **Composite**: round the foreground's corners, size the background around it with
//!    a margin, alpha-blend, and write the result ([`composite`])
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so a seeded generator
//! reproduces output byte for byte.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod foundation;

/// Background synthesis.
pub mod background;
/// Foreground compositing and output.
pub mod composite;
/// Options and JSON loading.
pub mod config;
/// Palette generation.
pub mod palette;

pub use assets::color::{parse_seed_color, random_seed_color};
pub use assets::decode::{decode_image, load_rgba};
pub use assets::sample::average_top_half_color;
pub use background::{noise_dims, sample_noise_field, synthesize_background, upscale_nearest};
pub use composite::{compose, composite, margin_for, output_format, save_atomic};
pub use config::{BackgroundOpts, CompositeOpts};
pub use effects::blur::gaussian_blur_rgb8;
pub use effects::mask::{round_corners, rounded_rect_mask};
pub use foundation::core::{Rgb8, Size};
pub use foundation::error::{BackdropError, BackdropResult};
pub use palette::{PALETTE_LEN, Palette, generate_palette};
