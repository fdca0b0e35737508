use rayon::prelude::*;

use pixmorph_image::Image;

/// Apply a function to each pixel in the image in parallel.
///
/// The source and destination images are split into rows and every row pair is
/// processed on the rayon thread pool. The closure receives the channel values of
/// one source pixel and the channel values of the destination pixel at the same
/// position.
///
/// Precondition: the source and destination images must have the same size.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel of the destination image in parallel, passing
/// the pixel coordinates.
///
/// The closure receives `(x, y, dst_pixel)` where `x` is the column and `y` the row
/// of the destination pixel.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(y, dst_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
        });
}

/// Same as [`par_iter_rows_indexed`] but every rayon job owns a piece of mutable
/// state created by `init`.
///
/// The state is never shared between threads, which makes it the place to keep
/// per-worker resources such as a random number generator.
pub fn par_iter_rows_indexed_init<T, const C: usize, S>(
    dst: &mut Image<T, C>,
    init: impl Fn() -> S + Send + Sync,
    f: impl Fn(&mut S, usize, usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each_init(init, |state, (y, dst_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| f(state, x, y, dst_pixel));
        });
}
