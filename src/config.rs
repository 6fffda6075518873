//! Tunable options for background synthesis and compositing.
//!
//! Options deserialize from JSON with every field optional:
//!
//! ```json
//! { "corner_radius": 24, "margin_pct": 0.08, "background": { "blur_radius": 40.0 } }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::background::validate_noise_scale;
use crate::foundation::error::{BackdropError, BackdropResult};

/// Background synthesis options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundOpts {
    /// Reduced noise raster size as a fraction of the target, in `(0, 1]`.
    pub noise_scale: f64,
    /// Gaussian blur standard deviation in pixels.
    pub blur_radius: f32,
}

impl Default for BackgroundOpts {
    fn default() -> Self {
        Self {
            noise_scale: 0.1,
            blur_radius: 50.0,
        }
    }
}

impl BackgroundOpts {
    /// Reject out-of-range values.
    pub fn validate(&self) -> BackdropResult<()> {
        validate_noise_scale(self.noise_scale)?;
        if !self.blur_radius.is_finite() || self.blur_radius < 0.0 {
            return Err(BackdropError::validation(format!(
                "blur_radius must be finite and >= 0, got {}",
                self.blur_radius
            )));
        }
        Ok(())
    }
}

/// Compositing options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositeOpts {
    /// Foreground corner radius in pixels.
    pub corner_radius: u32,
    /// Margin as a fraction of the foreground's shorter side.
    pub margin_pct: f64,
    /// Background synthesis options.
    pub background: BackgroundOpts,
}

impl Default for CompositeOpts {
    fn default() -> Self {
        Self {
            corner_radius: 20,
            margin_pct: 0.1,
            background: BackgroundOpts::default(),
        }
    }
}

impl CompositeOpts {
    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BackdropResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BackdropError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse options from JSON.
    pub fn from_reader(r: impl Read) -> BackdropResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| BackdropError::validation(format!("parse options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject out-of-range values, including nested background options.
    pub fn validate(&self) -> BackdropResult<()> {
        if !self.margin_pct.is_finite() || self.margin_pct < 0.0 {
            return Err(BackdropError::validation(format!(
                "margin_pct must be finite and >= 0, got {}",
                self.margin_pct
            )));
        }
        self.background.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
