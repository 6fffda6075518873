/// Premultiplied source-over blending.
pub mod blend;
/// Separable Gaussian blur.
pub mod blur;
/// Rounded-corner opacity masks.
pub mod mask;
