//! Channel extraction.
//!
//! Both functions operate on an RGB source and return a new (H, W, 3)
//! buffer with the unrelated channels zeroed, leaving the source intact.
//!
//! - [`extract_rgb`] isolates one additive channel.
//! - [`extract_cmyk`] produces a subtractive-channel *preview* by masking
//!   RGB channel groups. It is deliberately not a CMYK decomposition:
//!   cyan keeps G and B, magenta keeps R and B, yellow keeps R and G, and
//!   black is entirely zero. For a true decomposition see
//!   [`crate::convert::rgb_to_cmyk`].

use pix_core::{ChannelLayout, Error, ImageBuffer, Result};
#[allow(unused_imports)]
use tracing::trace;

/// Number of subtractive channel views: cyan, magenta, yellow, black.
const CMYK_VIEWS: usize = 4;

/// Extracts one RGB channel into an otherwise-zeroed buffer.
///
/// # Arguments
///
/// * `src` - RGB source buffer
/// * `index` - 0 (red), 1 (green) or 2 (blue)
///
/// # Errors
///
/// - [`Error::InvalidChannelCount`] when `src` is not RGB
/// - [`Error::InvalidIndex`] when `index > 2`
///
/// # Example
///
/// ```rust
/// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
/// use pix_ops::channels::extract_rgb;
///
/// let mut img = ImageBuffer::new(2, 2, ChannelLayout::Rgb, ValueRange::Normalized);
/// img.fill(&[0.2, 0.4, 0.6]);
/// let red = extract_rgb(&img, 0).unwrap();
/// assert_eq!(red.pixel(0, 0), &[0.2, 0.0, 0.0]);
/// ```
pub fn extract_rgb(src: &ImageBuffer, index: usize) -> Result<ImageBuffer> {
    trace!(index, "extract_rgb");

    if src.layout() != ChannelLayout::Rgb {
        return Err(Error::invalid_channel_count(3, src.channels()));
    }
    if index >= 3 {
        return Err(Error::invalid_index(index, 3));
    }

    let mut dst = src.zeros_like();
    let channels = src.channels();
    for (out, px) in dst.data_mut().chunks_exact_mut(channels).zip(src.data().chunks_exact(channels)) {
        out[index] = px[index];
    }
    Ok(dst)
}

/// Masks an RGB buffer down to one subtractive-channel view.
///
/// `index` selects cyan (0), magenta (1), yellow (2) or black (3). The
/// result is the RGB channel group that remains visible through that ink:
/// the complementary additive channel is zeroed, and the black view is
/// entirely zero. The input is RGB, not CMYK - this emulates the channel
/// views of a subtractive separation without decomposing.
///
/// # Errors
///
/// - [`Error::InvalidChannelCount`] when `src` is not RGB
/// - [`Error::InvalidIndex`] when `index > 3`
pub fn extract_cmyk(src: &ImageBuffer, index: usize) -> Result<ImageBuffer> {
    trace!(index, "extract_cmyk");

    if src.layout() != ChannelLayout::Rgb {
        return Err(Error::invalid_channel_count(3, src.channels()));
    }
    if index >= CMYK_VIEWS {
        return Err(Error::invalid_index(index, CMYK_VIEWS));
    }

    let mut dst = src.zeros_like();
    // The additive channels kept per view; black keeps none.
    let kept: &[usize] = match index {
        0 => &[1, 2], // cyan: green + blue
        1 => &[0, 2], // magenta: red + blue
        2 => &[0, 1], // yellow: red + green
        _ => &[],     // black
    };

    let channels = src.channels();
    for (out, px) in dst.data_mut().chunks_exact_mut(channels).zip(src.data().chunks_exact(channels)) {
        for &ch in kept {
            out[ch] = px[ch];
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_core::ValueRange;

    fn sample() -> ImageBuffer {
        let mut img = ImageBuffer::new(2, 2, ChannelLayout::Rgb, ValueRange::Normalized);
        img.set_pixel(0, 0, &[0.1, 0.2, 0.3]);
        img.set_pixel(0, 1, &[0.4, 0.5, 0.6]);
        img.set_pixel(1, 0, &[0.7, 0.8, 0.9]);
        img.set_pixel(1, 1, &[1.0, 0.0, 1.0]);
        img
    }

    #[test]
    fn test_extract_rgb_copies_only_index() {
        let src = sample();
        let green = extract_rgb(&src, 1).unwrap();
        for ((_, _, out), (_, _, px)) in green.pixels().zip(src.pixels()) {
            assert_eq!(out[0], 0.0);
            assert_eq!(out[1], px[1]);
            assert_eq!(out[2], 0.0);
        }
    }

    #[test]
    fn test_extract_rgb_leaves_source_intact() {
        let src = sample();
        let before = src.clone();
        let _ = extract_rgb(&src, 0).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_extract_rgb_invalid_index() {
        let err = extract_rgb(&sample(), 3).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 3, limit: 3 }));
    }

    #[test]
    fn test_extract_rgb_requires_rgb() {
        let cmyk = ImageBuffer::new(2, 2, ChannelLayout::Cmyk, ValueRange::Normalized);
        let err = extract_rgb(&cmyk, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidChannelCount { expected: 3, got: 4 }));
    }

    #[test]
    fn test_cyan_masks_red() {
        let cyan = extract_cmyk(&sample(), 0).unwrap();
        assert_eq!(cyan.pixel(0, 0), &[0.0, 0.2, 0.3]);
    }

    #[test]
    fn test_magenta_masks_green() {
        let magenta = extract_cmyk(&sample(), 1).unwrap();
        assert_eq!(magenta.pixel(0, 1), &[0.4, 0.0, 0.6]);
    }

    #[test]
    fn test_yellow_masks_blue() {
        let yellow = extract_cmyk(&sample(), 2).unwrap();
        assert_eq!(yellow.pixel(1, 0), &[0.7, 0.8, 0.0]);
    }

    #[test]
    fn test_black_view_is_zero() {
        let black = extract_cmyk(&sample(), 3).unwrap();
        assert!(black.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_extract_cmyk_invalid_index() {
        let err = extract_cmyk(&sample(), 4).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 4, limit: 4 }));
    }
}
