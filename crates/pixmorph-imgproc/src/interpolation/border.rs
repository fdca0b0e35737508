use pixmorph_image::ImageSize;

/// Policy applied when a mapped source coordinate lies outside the source image.
///
/// Every geometric filter maps an output pixel to a real valued source position,
/// truncates it to integer pixel indices and then resolves it against the source
/// bounds with one of these policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Truncate toward zero, then clamp both indices into the valid range.
    Clamp,
    /// Truncate toward zero; indices outside the image leave the output pixel at
    /// its default value.
    Skip,
    /// The real valued position must lie inside `[0, width) x [0, height)`,
    /// otherwise the output pixel keeps the background value.
    Fill,
}

impl BorderMode {
    /// Resolve a real valued source position to integer pixel indices.
    ///
    /// # Arguments
    ///
    /// * `u` - The source x coordinate.
    /// * `v` - The source y coordinate.
    /// * `size` - The size of the source image.
    ///
    /// # Returns
    ///
    /// The `(x, y)` indices of the source pixel to sample, or `None` if nothing
    /// should be written. `NaN` coordinates and empty images always give `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use pixmorph_image::ImageSize;
    /// use pixmorph_imgproc::interpolation::BorderMode;
    ///
    /// let size = ImageSize { width: 4, height: 3 };
    ///
    /// assert_eq!(BorderMode::Clamp.resolve(-2.5, 7.0, size), Some((0, 2)));
    /// assert_eq!(BorderMode::Skip.resolve(-0.5, 1.9, size), Some((0, 1)));
    /// assert_eq!(BorderMode::Skip.resolve(4.0, 1.0, size), None);
    /// assert_eq!(BorderMode::Fill.resolve(-0.5, 1.9, size), None);
    /// ```
    pub fn resolve(&self, u: f64, v: f64, size: ImageSize) -> Option<(usize, usize)> {
        if u.is_nan() || v.is_nan() || size.width == 0 || size.height == 0 {
            return None;
        }

        let (w, h) = (size.width as i64, size.height as i64);

        match self {
            BorderMode::Clamp => {
                // `as` truncates toward zero and saturates on overflow
                let x = (u as i64).clamp(0, w - 1);
                let y = (v as i64).clamp(0, h - 1);
                Some((x as usize, y as usize))
            }
            BorderMode::Skip => {
                let (x, y) = (u as i64, v as i64);
                if x < 0 || x >= w || y < 0 || y >= h {
                    return None;
                }
                Some((x as usize, y as usize))
            }
            BorderMode::Fill => {
                if u < 0.0 || u >= w as f64 || v < 0.0 || v >= h as f64 {
                    return None;
                }
                Some((u as usize, v as usize))
            }
        }
    }
}
