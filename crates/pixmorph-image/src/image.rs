use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixmorph_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored densely in row-major order with shape (H, W, C), so the
/// channel values of the pixel at `(x, y)` start at `(y * width + x) * C`.
///
/// Cloning an image produces a fully independent copy of its pixel data.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the image has no channels or the length of the pixel data does not match
    /// the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if CHANNELS == 0 {
            return Err(ImageError::UnsupportedChannels(CHANNELS, 1));
        }

        // check if the data length matches the image size
        let expected = size.width * size.height * CHANNELS;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value every channel of every pixel is set to.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   },
    ///   0u8,
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Borrow the channel values of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Callers are expected to have
    /// clamped or validated the coordinates already; use [`Image::get_pixel`]
    /// for a checked lookup.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[T] {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({x}, {y}) out of bounds for {}",
            self.size
        );
        let base = (y * self.width() + x) * CHANNELS;
        &self.data[base..base + CHANNELS]
    }

    /// Get a copy of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the coordinates are outside the image, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![1, 2, 3, 4, 5, 6],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 0).unwrap(), [4, 5, 6]);
    /// assert!(image.get_pixel(2, 0).is_err());
    /// ```
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[T; CHANNELS], ImageError>
    where
        T: Copy + Default,
    {
        self.check_bounds(x, y)?;
        let mut pixel = [T::default(); CHANNELS];
        pixel.copy_from_slice(self.pixel(x, y));
        Ok(pixel)
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the coordinates are outside the image, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [T; CHANNELS]) -> Result<(), ImageError>
    where
        T: Copy,
    {
        self.check_bounds(x, y)?;
        let base = (y * self.width() + x) * CHANNELS;
        self.data[base..base + CHANNELS].copy_from_slice(&pixel);
        Ok(())
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(
            image_size.to_string(),
            "ImageSize { width: 10, height: 20 }"
        );
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_wrong_data_length() {
        let res = Image::<u8, 3>::new([2, 2].into(), vec![0u8; 11]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(11, 12)));
    }

    #[test]
    fn image_zero_channels() {
        assert_eq!(
            Image::<u8, 0>::new([2, 2].into(), vec![]),
            Err(ImageError::UnsupportedChannels(0, 1))
        );
        assert_eq!(
            Image::<u8, 0>::from_size_val([3, 1].into(), 0),
            Err(ImageError::UnsupportedChannels(0, 1))
        );
    }

    #[test]
    fn image_get_set_pixel() -> Result<(), ImageError> {
        let mut image = Image::<u8, 4>::from_size_val([3, 2].into(), 0)?;
        image.set_pixel(2, 1, [10, 20, 30, 40])?;

        assert_eq!(image.get_pixel(2, 1)?, [10, 20, 30, 40]);
        assert_eq!(image.pixel(2, 1), &[10, 20, 30, 40]);
        assert_eq!(image.get_pixel(0, 0)?, [0, 0, 0, 0]);
        assert_eq!(&image.as_slice()[20..24], &[10, 20, 30, 40]);

        assert_eq!(
            image.set_pixel(3, 0, [0; 4]),
            Err(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        );
        assert_eq!(
            image.get_pixel(0, 2),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );

        Ok(())
    }

    #[test]
    #[should_panic]
    fn image_pixel_out_of_bounds() {
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 0).unwrap();
        let _ = image.pixel(0, 2);
    }

    #[test]
    fn image_clone_is_deep() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 7)?;
        let mut copy = image.clone();
        copy.set_pixel(0, 0, [1, 2, 3])?;

        assert_eq!(image.get_pixel(0, 0)?, [7, 7, 7]);
        assert_eq!(copy.get_pixel(0, 0)?, [1, 2, 3]);

        Ok(())
    }
}
