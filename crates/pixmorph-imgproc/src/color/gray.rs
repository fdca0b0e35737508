use crate::parallel;
use pixmorph_image::{Image, ImageError};

/// Define the RGB weights for the grayscale conversion, in thousandths.
const RW: u32 = 299;
const GW: u32 = 587;
const BW: u32 = 114;

/// Luma of an 8-bit RGB triple, truncated toward zero.
///
/// The weighted sum is exact in integer thousandths. Evaluating it in floating
/// point lands just below the integer for many gray inputs (`(1, 1, 1)` sums to
/// `0.9999999999999999`), which would make truncation drift gray pixels down.
#[inline]
fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = (RW * r as u32 + GW * g as u32 + BW * b as u32) / 1000;
    // weights sum to 1000, so the value never leaves [0, 255]
    y as u8
}

/// Convert an RGB(A) image to a grayscale RGB(A) image using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// The luma is truncated, not rounded, and written to the red, green and blue
/// channels. Any channel after the third (alpha) is copied unchanged.
///
/// The sum is taken in integer thousandths, so the result differs from a floating
/// point evaluation on the inputs where the float rounding error lands just below
/// an integer, e.g. the gray pixel `(1, 1, 1)` stays 1 instead of dropping to 0.
///
/// # Arguments
///
/// * `src` - The input image with at least 3 channels.
///
/// # Returns
///
/// A new image with the same size and channel count as `src`.
///
/// # Errors
///
/// Returns an error if the image has fewer than 3 channels.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::color::grayscale;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![255, 0, 0, 10, 10, 10],
/// )
/// .unwrap();
///
/// let gray = grayscale(&image).unwrap();
/// assert_eq!(gray.as_slice(), &[76, 76, 76, 10, 10, 10]);
/// ```
pub fn grayscale<const C: usize>(src: &Image<u8, C>) -> Result<Image<u8, C>, ImageError> {
    super::check_color_channels::<C>()?;
    log::trace!("grayscale {}", src.size());

    let mut dst = src.clone();

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let y = luma_u8(src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel[..3].fill(y);
    });

    Ok(dst)
}
