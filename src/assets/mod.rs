/// Seed color parsing and random seed colors.
pub mod color;
/// Foreground image loading.
pub mod decode;
/// Color sampling from existing images.
pub mod sample;
