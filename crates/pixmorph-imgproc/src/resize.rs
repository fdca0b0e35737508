use pixmorph_image::{Image, ImageError, ImageSize};

use crate::interpolation::{remap_with, BorderMode, InterpolationMode};

/// Resize an image to a new size with nearest neighbor sampling.
///
/// The output pixel `(x, y)` samples the source pixel
/// `(trunc(x * width / target_width), trunc(y * height / target_height))`.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `target_width` - The width of the output image.
/// * `target_height` - The height of the output image.
///
/// # Returns
///
/// A new image of size `target_width x target_height`.
///
/// # Errors
///
/// Returns an error if either target dimension is zero.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::resize::scale;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![10, 20],
/// )
/// .unwrap();
///
/// let scaled = scale(&image, 4, 2).unwrap();
///
/// assert_eq!(scaled.size(), ImageSize { width: 4, height: 2 });
/// assert_eq!(scaled.as_slice(), &[10, 10, 20, 20, 10, 10, 20, 20]);
/// ```
pub fn scale<const C: usize>(
    src: &Image<u8, C>,
    target_width: usize,
    target_height: usize,
) -> Result<Image<u8, C>, ImageError> {
    scale_with(src, target_width, target_height, InterpolationMode::Nearest)
}

/// Resize an image to a new size with the given interpolation mode.
///
/// - [`InterpolationMode::Nearest`] behaves exactly like [`scale`].
/// - [`InterpolationMode::Bilinear`] aligns the corner pixels of both images, so
///   the output pixel `x` samples the source at `x * (width - 1) / (target_width - 1)`.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `target_width` - The width of the output image.
/// * `target_height` - The height of the output image.
/// * `interpolation` - The sampling kernel.
///
/// # Errors
///
/// Returns an error if either target dimension is zero.
pub fn scale_with<const C: usize>(
    src: &Image<u8, C>,
    target_width: usize,
    target_height: usize,
    interpolation: InterpolationMode,
) -> Result<Image<u8, C>, ImageError> {
    if target_width == 0 || target_height == 0 {
        return Err(ImageError::InvalidTargetSize(target_width, target_height));
    }

    let dst_size = ImageSize {
        width: target_width,
        height: target_height,
    };
    let (src_w, src_h) = (src.width() as f64, src.height() as f64);
    let (dst_w, dst_h) = (target_width as f64, target_height as f64);

    log::debug!(
        "scale {} -> {dst_size} ({interpolation:?})",
        src.size()
    );

    match interpolation {
        // in range by construction, the clamp only guards the last ulp
        InterpolationMode::Nearest => remap_with(
            src,
            dst_size,
            BorderMode::Clamp,
            interpolation,
            |x, y| (x as f64 * src_w / dst_w, y as f64 * src_h / dst_h),
        ),
        InterpolationMode::Bilinear => {
            let step_x = corner_aligned_step(src.width(), target_width);
            let step_y = corner_aligned_step(src.height(), target_height);
            remap_with(
                src,
                dst_size,
                BorderMode::Clamp,
                interpolation,
                |x, y| (x as f64 * step_x, y as f64 * step_y),
            )
        }
    }
}

fn corner_aligned_step(src_len: usize, dst_len: usize) -> f64 {
    if dst_len <= 1 || src_len <= 1 {
        return 0.0;
    }
    (src_len - 1) as f64 / (dst_len - 1) as f64
}
