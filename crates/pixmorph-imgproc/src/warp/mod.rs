//! Geometric image transformations driven by inverse coordinate mapping.
//!
//! | Filter | Output size | Out-of-range policy |
//! |---|---|---|
//! | [`crate::resize::scale`] | caller specified | clamp (never triggered) |
//! | [`rotate`] | rotated bounding box | background fill outside the footprint |
//! | [`swirl`] | same as input | skip |
//! | [`blur`] | same as input | clamp |
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```
//! use pixmorph_image::Image;
//! use pixmorph_imgproc::warp::{rotate, rotated_canvas_size};
//!
//! let image = Image::<u8, 3>::from_size_val([64, 32].into(), 255).unwrap();
//! let rotated = rotate(&image, 45.0).unwrap();
//!
//! assert_eq!(rotated.size(), rotated_canvas_size(image.size(), 45.0));
//! ```

mod jitter;
mod rotate;
mod swirl;

pub use jitter::{blur, blur_with_rng};
pub use rotate::{rotate, rotated_canvas_size};
pub use swirl::swirl;
