use pixmorph_image::{Image, ImageError};

/// Create an independent copy of an image.
///
/// The returned image has the same size, channel count and pixel values as `src`
/// and shares no storage with it.
///
/// # Example
///
/// ```
/// use pixmorph_image::Image;
/// use pixmorph_imgproc::core::copy;
///
/// let image = Image::<u8, 3>::from_size_val([4, 4].into(), 9).unwrap();
/// let mut copied = copy(&image).unwrap();
/// copied.set_pixel(0, 0, [1, 2, 3]).unwrap();
///
/// assert_eq!(image.get_pixel(0, 0).unwrap(), [9, 9, 9]);
/// ```
pub fn copy<T: Clone, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError> {
    Image::new(src.size(), src.as_slice().to_vec())
}

/// Compute the mean absolute difference between two images.
///
/// $ L1(a, b) = \frac{1}{N} \sum_{i=1}^{N} |a_i - b_i| $
///
/// where `N` is the number of channel values.
///
/// # Arguments
///
/// * `image1` - The first input image.
/// * `image2` - The second input image.
///
/// # Errors
///
/// Returns an error if the two images have different sizes.
///
/// # Example
///
/// ```
/// use pixmorph_image::Image;
/// use pixmorph_imgproc::core::mean_abs_diff;
///
/// let a = Image::<u8, 1>::new([2, 1].into(), vec![0, 10]).unwrap();
/// let b = Image::<u8, 1>::new([2, 1].into(), vec![4, 4]).unwrap();
///
/// assert_eq!(mean_abs_diff(&a, &b).unwrap(), 5.0);
/// ```
pub fn mean_abs_diff<const C: usize>(
    image1: &Image<u8, C>,
    image2: &Image<u8, C>,
) -> Result<f64, ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.width(),
            image1.height(),
            image2.width(),
            image2.height(),
        ));
    }

    let n = image1.as_slice().len();
    if n == 0 {
        return Ok(0.0);
    }

    let sum: u64 = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice())
        .map(|(&a, &b)| a.abs_diff(b) as u64)
        .sum();

    Ok(sum as f64 / n as f64)
}

#[cfg(test)]
mod tests {
    use pixmorph_image::{Image, ImageError};

    #[test]
    fn copy_is_independent() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new([2, 2].into(), (0..16).collect())?;

        let mut copied = super::copy(&image)?;
        assert_eq!(copied, image);

        copied.as_slice_mut().fill(0);
        assert_eq!(image.as_slice(), (0..16).collect::<Vec<u8>>().as_slice());

        Ok(())
    }

    #[test]
    fn mean_abs_diff_values() -> Result<(), ImageError> {
        let a = Image::<u8, 3>::from_size_val([2, 2].into(), 255)?;
        let b = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;

        assert_eq!(super::mean_abs_diff(&a, &b)?, 255.0);
        assert_eq!(super::mean_abs_diff(&a, &a)?, 0.0);

        let c = Image::<u8, 3>::from_size_val([2, 1].into(), 0)?;
        assert_eq!(
            super::mean_abs_diff(&a, &c),
            Err(ImageError::InvalidImageSize(2, 2, 2, 1))
        );

        Ok(())
    }
}
