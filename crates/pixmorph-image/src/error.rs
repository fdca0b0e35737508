/// An error type for the image and image processing crates.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image sizes of two images do not match.
    #[error("Image size ({0}, {1}) does not match the expected size ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates are outside the image.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the image has fewer channels than an operation requires.
    #[error("Operation requires at least {1} channels, image has {0}")]
    UnsupportedChannels(usize, usize),

    /// Error when a requested output size has a zero dimension.
    #[error("Invalid target size ({0}, {1}), both dimensions must be positive")]
    InvalidTargetSize(usize, usize),

    /// Error when the random displacement range is empty.
    #[error("Invalid displacement offset ({0}), must be positive")]
    InvalidOffset(usize),
}
