//! Spatial mean (box) filtering.
//!
//! [`mean_filter`] replaces every component with the arithmetic mean of
//! the k x k window centered on its pixel. Windows that reach past the
//! image are completed with reflect-at-edge padding: the sample at offset
//! -1 mirrors the sample at offset +1 (the edge sample itself is not
//! repeated), and channels are never padded.
//!
//! Complexity is O(H * W * C * k^2) with the per-pixel window scan. With
//! the `parallel` feature (default) output rows are distributed across
//! the rayon pool; the two paths produce identical results.

use pix_core::{Error, ImageBuffer, Result};
#[allow(unused_imports)]
use tracing::trace;

/// Applies a k x k mean filter with reflect-at-edge padding.
///
/// The kernel size must be odd and at least 1; `mean_filter(img, 1)` is
/// the identity transform. Shape and range tag are preserved.
///
/// # Errors
///
/// Returns [`Error::InvalidKernelSize`] for an even or zero kernel size,
/// before any output allocation.
///
/// # Example
///
/// ```rust
/// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
/// use pix_ops::filter::mean_filter;
///
/// let mut img = ImageBuffer::new(4, 4, ChannelLayout::Rgb, ValueRange::Normalized);
/// img.fill(&[0.5, 0.5, 0.5]);
/// let smoothed = mean_filter(&img, 3).unwrap();
/// // A constant image is a fixed point of the mean filter.
/// assert_eq!(smoothed, img);
/// ```
pub fn mean_filter(src: &ImageBuffer, kernel_size: usize) -> Result<ImageBuffer> {
    trace!(h = src.height(), w = src.width(), kernel_size, "mean_filter");

    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(Error::InvalidKernelSize { size: kernel_size });
    }
    if src.pixel_count() == 0 {
        return Ok(src.clone());
    }

    let (height, width, channels) = src.shape();
    let radius = (kernel_size / 2) as isize;
    let window = (kernel_size * kernel_size) as f32;
    let row_len = width * channels;

    let fill_row = |r: usize, row_out: &mut [f32]| {
        for c in 0..width {
            for ch in 0..channels {
                let mut sum = 0.0;
                for dy in -radius..=radius {
                    let sr = reflect(r as isize + dy, height);
                    let row = src.row(sr);
                    for dx in -radius..=radius {
                        let sc = reflect(c as isize + dx, width);
                        sum += row[sc * channels + ch];
                    }
                }
                row_out[c * channels + ch] = sum / window;
            }
        }
    };

    let mut dst = src.zeros_like();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        dst.data_mut()
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(r, row_out)| fill_row(r, row_out));
    }

    #[cfg(not(feature = "parallel"))]
    for (r, row_out) in dst.data_mut().chunks_mut(row_len).enumerate() {
        fill_row(r, row_out);
    }

    Ok(dst)
}

/// Maps an out-of-range index back inside [0, len) by reflection.
///
/// Mirrors about the edge samples without repeating them: -1 maps to 1,
/// len maps to len - 2. Indices far outside bounce with period
/// 2 * (len - 1), so any kernel size is accepted.
#[inline]
fn reflect(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let i = i.rem_euclid(period);
    if i >= len as isize {
        (period - i) as usize
    } else {
        i as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pix_core::{ChannelLayout, ValueRange};

    #[test]
    fn test_reflect_indices() {
        assert_eq!(reflect(-1, 5), 1);
        assert_eq!(reflect(-2, 5), 2);
        assert_eq!(reflect(0, 5), 0);
        assert_eq!(reflect(4, 5), 4);
        assert_eq!(reflect(5, 5), 3);
        assert_eq!(reflect(6, 5), 2);
        assert_eq!(reflect(3, 1), 0);
    }

    #[test]
    fn test_kernel_one_is_identity() {
        let mut img = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
        img.set_pixel(1, 1, &[0.3, 0.6, 0.9]);
        let out = mean_filter(&img, 1).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_even_kernel_rejected() {
        let img = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
        assert!(matches!(
            mean_filter(&img, 4),
            Err(Error::InvalidKernelSize { size: 4 })
        ));
        assert!(matches!(
            mean_filter(&img, 0),
            Err(Error::InvalidKernelSize { size: 0 })
        ));
    }

    #[test]
    fn test_constant_image_is_fixed_point() {
        let mut img = ImageBuffer::new(5, 5, ChannelLayout::Rgb, ValueRange::Normalized);
        img.fill(&[0.25, 0.5, 0.75]);
        let out = mean_filter(&img, 3).unwrap();
        for (got, want) in out.data().iter().zip(img.data()) {
            assert_relative_eq!(got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_reflect_padding_on_single_row() {
        // One row: the vertical window collapses onto row 0, so each
        // output is the mean of the reflected horizontal triple.
        let img = ImageBuffer::from_data(
            1,
            3,
            ChannelLayout::Rgb,
            ValueRange::Normalized,
            vec![0.0, 0.0, 0.0, 0.3, 0.3, 0.3, 0.9, 0.9, 0.9],
        )
        .unwrap();
        let out = mean_filter(&img, 3).unwrap();
        // col 0 window: reflect(-1) = col 1 -> (0.3 + 0.0 + 0.3) / 3
        assert_relative_eq!(out.pixel(0, 0)[0], 0.2, epsilon = 1e-6);
        // col 1 window: (0.0 + 0.3 + 0.9) / 3
        assert_relative_eq!(out.pixel(0, 1)[0], 0.4, epsilon = 1e-6);
        // col 2 window: reflect(3) = col 1 -> (0.3 + 0.9 + 0.3) / 3
        assert_relative_eq!(out.pixel(0, 2)[0], 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_channels_filtered_independently() {
        let mut img = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
        img.fill(&[1.0, 0.0, 0.5]);
        let out = mean_filter(&img, 3).unwrap();
        for (_, _, px) in out.pixels() {
            assert_relative_eq!(px[0], 1.0, epsilon = 1e-6);
            assert_relative_eq!(px[1], 0.0, epsilon = 1e-6);
            assert_relative_eq!(px[2], 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_kernel_larger_than_axis() {
        let mut img = ImageBuffer::new(2, 2, ChannelLayout::Rgb, ValueRange::Normalized);
        img.fill(&[0.5, 0.5, 0.5]);
        let out = mean_filter(&img, 5).unwrap();
        for (_, _, px) in out.pixels() {
            assert_relative_eq!(px[0], 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_range_tag_preserved() {
        let img = ImageBuffer::new(2, 2, ChannelLayout::Rgb, ValueRange::Denormalized);
        let out = mean_filter(&img, 3).unwrap();
        assert_eq!(out.range(), ValueRange::Denormalized);
    }
}
