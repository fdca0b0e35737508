//! Pixel-level color and geometric transformations for in-memory RGB(A) images.
//!
//! Every operation takes an [`image::Image`] by reference and returns a newly
//! allocated image; inputs are never modified.
//!
//! ```
//! use pixmorph::image::Image;
//!
//! let image = Image::<u8, 3>::from_size_val([32, 16].into(), 128).unwrap();
//!
//! let gray = pixmorph::grayscale(&image).unwrap();
//! let rotated = pixmorph::rotate(&gray, 30.0).unwrap();
//! let swirled = pixmorph::swirl(&rotated, 0.01).unwrap();
//!
//! assert_eq!(swirled.size(), rotated.size());
//! ```

#[doc(inline)]
pub use pixmorph_image as image;

#[doc(inline)]
pub use pixmorph_imgproc as imgproc;

pub use pixmorph_imgproc::color::grayscale;
pub use pixmorph_imgproc::core::copy;
pub use pixmorph_imgproc::enhance::{adjust_brightness, invert_color};
pub use pixmorph_imgproc::resize::scale;
pub use pixmorph_imgproc::warp::{blur, rotate, swirl};
