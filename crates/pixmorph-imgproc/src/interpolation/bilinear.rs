use pixmorph_image::Image;

/// Kernel for bilinear interpolation
///
/// The position is clamped into the image before the four neighbours are
/// weighted, and the result is rounded back to 8 bits.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `dst_pixel` - The channel values to write.
///
/// Precondition: the image is not empty and `u`, `v` are not `NaN`.
pub(crate) fn bilinear_interpolation<const C: usize>(
    image: &Image<u8, C>,
    u: f64,
    v: f64,
    dst_pixel: &mut [u8],
) {
    let (rows, cols) = (image.rows(), image.cols());

    let u = u.clamp(0.0, (cols - 1) as f64);
    let v = v.clamp(0.0, (rows - 1) as f64);

    let iu0 = u.trunc() as usize;
    let iv0 = v.trunc() as usize;

    let frac_u = u.fract();
    let frac_v = v.fract();

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let p00 = image.pixel(iu0, iv0);
    let p01 = image.pixel(iu1, iv0);
    let p10 = image.pixel(iu0, iv1);
    let p11 = image.pixel(iu1, iv1);

    for (k, out) in dst_pixel.iter_mut().enumerate() {
        let val = p00[k] as f64 * w00
            + p01[k] as f64 * w01
            + p10[k] as f64 * w10
            + p11[k] as f64 * w11;
        *out = val.round().clamp(0.0, 255.0) as u8;
    }
}
