mod gray;

pub use gray::grayscale;

use pixmorph_image::ImageError;

/// Color filters read the red, green and blue channels of every pixel.
pub(crate) fn check_color_channels<const C: usize>() -> Result<(), ImageError> {
    if C < 3 {
        return Err(ImageError::UnsupportedChannels(C, 3));
    }
    Ok(())
}
