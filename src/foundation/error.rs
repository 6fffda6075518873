use std::path::PathBuf;

/// Convenience result type used across Backdrop.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// Seed color string did not resolve to an RGB color.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Foreground image path does not exist.
    #[error("file not found: '{}'", .0.display())]
    NotFound(PathBuf),

    /// A raster size with a zero (or otherwise unusable) dimension.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Out-of-range options or unsupported output settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackdropError {
    /// Build a [`BackdropError::InvalidColor`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build a [`BackdropError::NotFound`] value.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Build a [`BackdropError::InvalidDimensions`] value.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`BackdropError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
