use pixmorph_image::{Image, ImageError, ImageSize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::interpolation::BorderMode;
use crate::parallel;

/// Source indices of the output pixel `(x, y)` for one random draw.
///
/// Both axes move by the same `draw - offset / 2`, and the result is clamped into
/// the image.
#[inline]
fn displaced_index(
    x: usize,
    y: usize,
    draw: usize,
    offset: usize,
    size: ImageSize,
) -> Option<(usize, usize)> {
    let shift = draw as f64 - (offset / 2) as f64;
    BorderMode::Clamp.resolve(x as f64 + shift, y as f64 + shift, size)
}

fn check_offset(offset: usize) -> Result<(), ImageError> {
    if offset == 0 {
        return Err(ImageError::InvalidOffset(offset));
    }
    Ok(())
}

/// Blur an image by moving every pixel a random distance.
///
/// For every output pixel one value `draw` is taken uniformly from `[0, offset)`
/// and the pixel is copied from `(x + d, y + d)` with `d = draw - offset / 2`,
/// clamped into the image. Unlike [`super::swirl`], displaced positions outside the
/// image are clamped, never skipped.
///
/// Rows are processed in parallel and every rayon job draws from its own
/// generator seeded from the thread local generator, so the output is not
/// reproducible between calls. Use [`blur_with_rng`] for a seeded, serial run.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `offset` - The size of the displacement range.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Errors
///
/// Returns an error if `offset` is zero.
///
/// # Example
///
/// ```
/// use pixmorph_image::Image;
/// use pixmorph_imgproc::warp::blur;
///
/// let image = Image::<u8, 3>::from_size_val([6, 4].into(), 42).unwrap();
///
/// let blurred = blur(&image, 5).unwrap();
///
/// assert_eq!(blurred, image);
/// ```
pub fn blur<const C: usize>(src: &Image<u8, C>, offset: usize) -> Result<Image<u8, C>, ImageError> {
    check_offset(offset)?;
    log::debug!("blur {} with offset {offset}", src.size());

    let src_size = src.size();
    let mut dst = Image::<u8, C>::from_size_val(src_size, 0)?;

    parallel::par_iter_rows_indexed_init(
        &mut dst,
        || StdRng::from_rng(&mut rand::rng()),
        |rng, x, y, dst_pixel| {
            let draw = rng.random_range(0..offset);
            if let Some((iu, iv)) = displaced_index(x, y, draw, offset, src_size) {
                dst_pixel.copy_from_slice(src.pixel(iu, iv));
            }
        },
    );

    Ok(dst)
}

/// Blur an image by random pixel movement, drawing from the given generator.
///
/// Same displacement rule as [`blur`], but the pixels are visited serially in
/// row-major order and every draw comes from `rng`, so a seeded generator gives
/// a reproducible result.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `offset` - The size of the displacement range.
/// * `rng` - The random number generator.
///
/// # Errors
///
/// Returns an error if `offset` is zero.
pub fn blur_with_rng<const C: usize, R: Rng>(
    src: &Image<u8, C>,
    offset: usize,
    rng: &mut R,
) -> Result<Image<u8, C>, ImageError> {
    check_offset(offset)?;

    let src_size = src.size();
    let mut dst = Image::<u8, C>::from_size_val(src_size, 0)?;
    let cols = src_size.width;

    dst.as_slice_mut()
        .chunks_exact_mut(C)
        .enumerate()
        .for_each(|(i, dst_pixel)| {
            let (x, y) = (i % cols, i / cols);
            let draw = rng.random_range(0..offset);
            if let Some((iu, iv)) = displaced_index(x, y, draw, offset, src_size) {
                dst_pixel.copy_from_slice(src.pixel(iu, iv));
            }
        });

    Ok(dst)
}
