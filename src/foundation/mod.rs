/// Color and size value types shared by every stage.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Fixed-point helpers for 8-bit channel math.
pub(crate) mod math;
