use pixmorph_image::{Image, ImageError, ImageSize};

use super::bilinear::bilinear_interpolation;
use super::{BorderMode, InterpolationMode};
use crate::parallel;

/// Apply a generic geometric transformation to an image.
///
/// For every pixel `(x, y)` of a new image of size `dst_size`, `map` returns the
/// real valued source position to sample. The position is resolved against the
/// source bounds with `border` and the source is sampled with `interpolation`.
/// Output pixels whose position is rejected by the border policy keep the zero
/// background (black, fully transparent for 4 channel images).
///
/// Every output pixel is computed independently, so the rows are processed in
/// parallel and `src` is only ever read.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst_size` - The size of the output image.
/// * `border` - The out-of-range policy.
/// * `interpolation` - The sampling kernel.
/// * `map` - The inverse transform from output to source coordinates.
///
/// # Returns
///
/// The newly allocated output image.
///
/// # Example
///
/// ```
/// use pixmorph_image::Image;
/// use pixmorph_imgproc::interpolation::{remap_with, BorderMode, InterpolationMode};
///
/// let image = Image::<u8, 1>::new([3, 1].into(), vec![1, 2, 3]).unwrap();
///
/// // horizontal mirror
/// let mirrored = remap_with(
///     &image,
///     image.size(),
///     BorderMode::Clamp,
///     InterpolationMode::Nearest,
///     |x, y| ((2 - x) as f64, y as f64),
/// )
/// .unwrap();
///
/// assert_eq!(mirrored.as_slice(), &[3, 2, 1]);
/// ```
pub fn remap_with<const C: usize>(
    src: &Image<u8, C>,
    dst_size: ImageSize,
    border: BorderMode,
    interpolation: InterpolationMode,
    map: impl Fn(usize, usize) -> (f64, f64) + Send + Sync,
) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::<u8, C>::from_size_val(dst_size, 0)?;
    let src_size = src.size();

    parallel::par_iter_rows_indexed(&mut dst, |x, y, dst_pixel| {
        let (u, v) = map(x, y);
        let Some((iu, iv)) = border.resolve(u, v, src_size) else {
            return;
        };
        match interpolation {
            InterpolationMode::Nearest => dst_pixel.copy_from_slice(src.pixel(iu, iv)),
            InterpolationMode::Bilinear => bilinear_interpolation(src, u, v, dst_pixel),
        }
    });

    Ok(dst)
}
