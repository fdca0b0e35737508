use pixmorph_image::{Image, ImageError};

use crate::color::check_color_channels;
use crate::parallel;

/// Invert the colors of an image.
///
/// Every red, green and blue channel `v` becomes `255 - v`. Any channel after the
/// third (alpha) is copied unchanged. Inverting twice returns the original image.
///
/// # Arguments
///
/// * `src` - The input image with at least 3 channels.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Errors
///
/// Returns an error if the image has fewer than 3 channels.
///
/// # Example
///
/// ```
/// use pixmorph_image::Image;
/// use pixmorph_imgproc::enhance::invert_color;
///
/// let image = Image::<u8, 3>::new([1, 1].into(), vec![255, 0, 100]).unwrap();
/// let inverted = invert_color(&image).unwrap();
///
/// assert_eq!(inverted.as_slice(), &[0, 255, 155]);
/// ```
pub fn invert_color<const C: usize>(src: &Image<u8, C>) -> Result<Image<u8, C>, ImageError> {
    check_color_channels::<C>()?;
    log::trace!("invert_color {}", src.size());

    let mut dst = src.clone();

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel[..3]
            .iter_mut()
            .zip(src_pixel[..3].iter())
            .for_each(|(d, &s)| *d = 255 - s);
    });

    Ok(dst)
}

/// Adjust the brightness of an image.
///
/// dst(x,y,c) = clamp(src(x,y,c) + amount, 0, 255)
///
/// The red, green and blue channels are shifted by `amount`, which may be negative,
/// and both bounds of the 8-bit range are enforced. Any channel after the third
/// (alpha) is copied unchanged.
///
/// # Arguments
///
/// * `src` - The input image with at least 3 channels.
/// * `amount` - The value added to every color channel.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Errors
///
/// Returns an error if the image has fewer than 3 channels.
///
/// # Example
///
/// ```
/// use pixmorph_image::Image;
/// use pixmorph_imgproc::enhance::adjust_brightness;
///
/// let image = Image::<u8, 3>::new([1, 1].into(), vec![200, 200, 200]).unwrap();
/// let brighter = adjust_brightness(&image, 100).unwrap();
///
/// assert_eq!(brighter.as_slice(), &[255, 255, 255]);
/// ```
pub fn adjust_brightness<const C: usize>(
    src: &Image<u8, C>,
    amount: i32,
) -> Result<Image<u8, C>, ImageError> {
    check_color_channels::<C>()?;
    log::trace!("adjust_brightness {} by {amount}", src.size());

    let mut dst = src.clone();

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel[..3]
            .iter_mut()
            .zip(src_pixel[..3].iter())
            .for_each(|(d, &s)| *d = (s as i32).saturating_add(amount).clamp(0, 255) as u8);
    });

    Ok(dst)
}
