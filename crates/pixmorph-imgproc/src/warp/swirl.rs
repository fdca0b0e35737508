use pixmorph_image::{Image, ImageError};

use crate::interpolation::{remap_with, BorderMode, InterpolationMode};

/// Apply a swirl effect to an image.
///
/// Every output pixel `(col, row)` is rotated about the centre
/// `(mid_x, mid_y) = (width / 2, height / 2)` (integer division) by an angle that
/// grows linearly with its distance `r` to the centre:
///
/// ```text
/// dx = col - mid_x, dy = row - mid_y
/// r = sqrt(dx² + dy²)
/// src_col = mid_x + r * cos(atan2(dy, dx) + degree * r)
/// src_row = mid_y + r * sin(atan2(dy, dx) + degree * r)
/// ```
///
/// The polar form is evaluated as the equivalent rotation of `(dx, dy)` by
/// `degree * r`, which makes `degree = 0` an exact identity.
///
/// Source positions are truncated toward zero and pixels whose source falls
/// outside the image are skipped, not clamped: they keep the zero background.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `degree` - The swirl intensity in radians per pixel of radius.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Example
///
/// ```
/// use pixmorph_image::Image;
/// use pixmorph_imgproc::warp::swirl;
///
/// let image = Image::<u8, 3>::from_size_val([8, 8].into(), 200).unwrap();
///
/// let swirled = swirl(&image, 0.1).unwrap();
///
/// assert_eq!(swirled.size(), image.size());
/// // the centre never moves
/// assert_eq!(swirled.get_pixel(4, 4).unwrap(), [200, 200, 200]);
/// ```
pub fn swirl<const C: usize>(src: &Image<u8, C>, degree: f64) -> Result<Image<u8, C>, ImageError> {
    let mid_x = (src.width() / 2) as f64;
    let mid_y = (src.height() / 2) as f64;

    log::debug!(
        "swirl {} by {degree} around ({mid_x}, {mid_y})",
        src.size()
    );

    remap_with(
        src,
        src.size(),
        BorderMode::Skip,
        InterpolationMode::Nearest,
        |col, row| {
            let dx = col as f64 - mid_x;
            let dy = row as f64 - mid_y;
            let radius = dx.hypot(dy);
            let (sin, cos) = (degree * radius).sin_cos();
            (mid_x + dx * cos - dy * sin, mid_y + dx * sin + dy * cos)
        },
    )
}
