//! Coordinate resolution and pixel sampling for geometric transformations.
//!
//! Every geometric filter in this crate follows the same three steps for each
//! output pixel:
//!
//! 1. map the output coordinate back to a real valued source position,
//! 2. truncate it to integer pixel indices,
//! 3. resolve those indices against the source bounds with a [`BorderMode`].
//!
//! The filters only differ in step 1 and in the policy they pick for step 3.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: copies the source pixel selected by the steps above
//! - **Bilinear**: weights the four pixels around the source position

mod bilinear;
mod border;
mod remap;

pub use border::BorderMode;
pub use remap::remap_with;

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor interpolation
    #[default]
    Nearest,
}
