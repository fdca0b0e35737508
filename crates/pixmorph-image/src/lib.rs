#![deny(missing_docs)]
//! Image types for pixel-level transformations

/// image representation for pixel processing.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
