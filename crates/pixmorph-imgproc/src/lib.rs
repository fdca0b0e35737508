#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image basic operations module.
pub mod core;

/// brightness and color inversion module.
pub mod enhance;

/// coordinate resolution and sampling utilities.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// image geometric transformations module.
pub mod warp;
