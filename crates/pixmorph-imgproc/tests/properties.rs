use pixmorph_image::{Image, ImageError, ImageSize};
use pixmorph_imgproc::{
    color, core, enhance,
    interpolation::InterpolationMode,
    resize,
    warp::{self, rotated_canvas_size},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image<const C: usize>(width: usize, height: usize, seed: u64) -> Image<u8, C> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height * C).map(|_| rng.random()).collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

fn gradient(width: usize, height: usize) -> Image<u8, 3> {
    let data = (0..height)
        .flat_map(|y| (0..width).flat_map(move |x| [(x * 8) as u8, (y * 10) as u8, 128]))
        .collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

#[test]
fn invert_twice_is_identity() -> Result<(), ImageError> {
    let rgb = random_image::<3>(31, 17, 1);
    assert_eq!(enhance::invert_color(&enhance::invert_color(&rgb)?)?, rgb);

    let rgba = random_image::<4>(8, 40, 2);
    assert_eq!(enhance::invert_color(&enhance::invert_color(&rgba)?)?, rgba);

    Ok(())
}

#[test]
fn grayscale_is_idempotent() -> Result<(), ImageError> {
    let image = random_image::<3>(25, 19, 3);

    let gray = color::grayscale(&image)?;

    assert_eq!(color::grayscale(&gray)?, gray);
    gray.as_slice()
        .chunks_exact(3)
        .for_each(|p| assert!(p[0] == p[1] && p[1] == p[2]));

    Ok(())
}

#[test]
fn brightness_saturates_to_white_and_black() -> Result<(), ImageError> {
    let image = random_image::<4>(13, 11, 4);

    let white = enhance::adjust_brightness(&image, 1000)?;
    let black = enhance::adjust_brightness(&image, -1000)?;

    for ((w, b), s) in white
        .as_slice()
        .chunks_exact(4)
        .zip(black.as_slice().chunks_exact(4))
        .zip(image.as_slice().chunks_exact(4))
    {
        assert_eq!(w, &[255, 255, 255, s[3]]);
        assert_eq!(b, &[0, 0, 0, s[3]]);
    }

    Ok(())
}

#[test]
fn same_size_filters_keep_dimensions() -> Result<(), ImageError> {
    let image = random_image::<3>(23, 7, 5);
    let size = image.size();

    assert_eq!(core::copy(&image)?.size(), size);
    assert_eq!(color::grayscale(&image)?.size(), size);
    assert_eq!(enhance::invert_color(&image)?.size(), size);
    assert_eq!(enhance::adjust_brightness(&image, 12)?.size(), size);
    assert_eq!(warp::blur(&image, 6)?.size(), size);
    assert_eq!(warp::swirl(&image, 0.02)?.size(), size);

    Ok(())
}

#[test]
fn filters_do_not_touch_input() -> Result<(), ImageError> {
    let image = random_image::<4>(12, 9, 6);
    let before = image.clone();

    let _ = color::grayscale(&image)?;
    let _ = enhance::invert_color(&image)?;
    let _ = enhance::adjust_brightness(&image, -30)?;
    let _ = warp::blur(&image, 3)?;
    let _ = resize::scale(&image, 5, 30)?;
    let _ = warp::rotate(&image, 33.0)?;
    let _ = warp::swirl(&image, 0.4)?;

    assert_eq!(image, before);

    Ok(())
}

#[test]
fn rotate_zero_keeps_image() -> Result<(), ImageError> {
    let image = random_image::<4>(19, 6, 7);

    let rotated = warp::rotate(&image, 0.0)?;

    assert_eq!(rotated.size(), image.size());
    assert_eq!(rotated, image);

    Ok(())
}

#[test]
fn rotate_uses_bounding_box() -> Result<(), ImageError> {
    let image = random_image::<3>(40, 10, 8);

    for angle in [15.0, 45.0, 90.0, 135.0, 200.0, -60.0] {
        let rotated = warp::rotate(&image, angle)?;
        assert_eq!(rotated.size(), rotated_canvas_size(image.size(), angle));
    }

    Ok(())
}

#[test]
fn rotate_full_turn_matches_input() -> Result<(), ImageError> {
    let image = random_image::<3>(10, 6, 9);

    let rotated = warp::rotate(&image, 360.0)?;

    assert_eq!(rotated, image);

    Ok(())
}

#[test]
fn swirl_zero_is_identity() -> Result<(), ImageError> {
    let image = random_image::<4>(37, 21, 10);

    assert_eq!(warp::swirl(&image, 0.0)?, image);

    Ok(())
}

#[test]
fn scale_round_trip_is_close() -> Result<(), ImageError> {
    let image = gradient(32, 24);

    for (w, h) in [(50, 37), (20, 15), (64, 48)] {
        let nearest = resize::scale(&resize::scale(&image, w, h)?, 32, 24)?;
        assert!(core::mean_abs_diff(&image, &nearest)? < 10.0);

        let bilinear = resize::scale_with(
            &resize::scale_with(&image, w, h, InterpolationMode::Bilinear)?,
            32,
            24,
            InterpolationMode::Bilinear,
        )?;
        assert!(core::mean_abs_diff(&image, &bilinear)? < 2.0);
    }

    Ok(())
}

#[test]
fn blur_samples_stay_on_diagonal() -> Result<(), ImageError> {
    let image = random_image::<3>(16, 12, 11);
    let offset = 5;

    let blurred = warp::blur(&image, offset)?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let out = blurred.get_pixel(x, y)?;
            let found = (-2i64..=2).any(|d| {
                let sx = (x as i64 + d).clamp(0, image.width() as i64 - 1) as usize;
                let sy = (y as i64 + d).clamp(0, image.height() as i64 - 1) as usize;
                image.pixel(sx, sy) == out
            });
            assert!(found, "pixel ({x}, {y}) was not taken from its diagonal");
        }
    }

    Ok(())
}
