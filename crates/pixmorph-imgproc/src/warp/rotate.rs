use pixmorph_image::{Image, ImageError, ImageSize};

use crate::interpolation::{remap_with, BorderMode, InterpolationMode};

/// Returns the size of the tight bounding box of an image rotated by `angle`.
///
/// new_width = floor(width * |cos(angle)| + height * |sin(angle)|)
/// new_height = floor(height * |cos(angle)| + width * |sin(angle)|)
///
/// # Arguments
///
/// * `size` - The size of the unrotated image.
/// * `angle` - The rotation angle in degrees.
///
/// # Example
///
/// ```
/// use pixmorph_image::ImageSize;
/// use pixmorph_imgproc::warp::rotated_canvas_size;
///
/// let size = ImageSize { width: 4, height: 2 };
///
/// assert_eq!(rotated_canvas_size(size, 0.0), size);
/// assert_eq!(rotated_canvas_size(size, 90.0), ImageSize { width: 2, height: 4 });
/// ```
pub fn rotated_canvas_size(size: ImageSize, angle: f64) -> ImageSize {
    let (sin, cos) = angle.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let (w, h) = (size.width as f64, size.height as f64);

    ImageSize {
        width: (w * cos + h * sin).floor() as usize,
        height: (h * cos + w * sin).floor() as usize,
    }
}

/// Rotate an image clockwise by `angle` degrees onto a canvas that fits it.
///
/// The output has the size given by [`rotated_canvas_size`]. The source is
/// centred on the canvas, with the offset `((new_w - w) / 2, (new_h - h) / 2)`
/// computed in integers, and rotated about its own centre `(w / 2, h / 2)`, also
/// in integers.
///
/// Each output pixel is sampled at its centre: the position is moved back by the
/// centring offset, rotated by `-angle` about the source centre and the source
/// pixel whose cell contains it is copied. Canvas pixels outside the rotated
/// source footprint keep the zero background.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `angle` - The clockwise rotation angle in degrees.
///
/// # Returns
///
/// The rotated image.
///
/// # Example
///
/// ```
/// use pixmorph_image::Image;
/// use pixmorph_imgproc::warp::rotate;
///
/// let image = Image::<u8, 1>::new([2, 2].into(), vec![1, 2, 3, 4]).unwrap();
///
/// let rotated = rotate(&image, 90.0).unwrap();
///
/// assert_eq!(rotated.as_slice(), &[3, 1, 4, 2]);
/// ```
pub fn rotate<const C: usize>(src: &Image<u8, C>, angle: f64) -> Result<Image<u8, C>, ImageError> {
    let dst_size = rotated_canvas_size(src.size(), angle);

    let (w, h) = (src.width() as i64, src.height() as i64);
    let tx = ((dst_size.width as i64 - w) / 2) as f64;
    let ty = ((dst_size.height as i64 - h) / 2) as f64;
    let cx = (w / 2) as f64;
    let cy = (h / 2) as f64;

    log::debug!(
        "rotate {} by {angle} deg onto {dst_size}, offset ({tx}, {ty})",
        src.size()
    );

    let (sin, cos) = angle.to_radians().sin_cos();

    remap_with(
        src,
        dst_size,
        BorderMode::Fill,
        InterpolationMode::Nearest,
        |x, y| {
            let px = x as f64 + 0.5 - tx - cx;
            let py = y as f64 + 0.5 - ty - cy;
            (cx + px * cos + py * sin, cy - px * sin + py * cos)
        },
    )
}
