//! RGB <-> CMYK color-space conversion.
//!
//! Closed-form per-pixel transforms between the additive and subtractive
//! models. Both directions scale their input into [0, 1] according to the
//! buffer's range tag and always produce a normalized output.
//!
//! # Formulas
//!
//! RGB to CMYK, per pixel:
//!
//! ```text
//! K = 1 - max(R, G, B)
//! K == 1:  C = M = Y = 0            (pure black)
//! K  < 1:  C = (1 - R - K) / (1 - K)
//!          M = (1 - G - K) / (1 - K)
//!          Y = (1 - B - K) / (1 - K)
//! ```
//!
//! CMYK to RGB, per pixel:
//!
//! ```text
//! R = (1 - C) * (1 - K)
//! G = (1 - M) * (1 - K)
//! B = (1 - Y) * (1 - K)
//! ```
//!
//! The round trip reconstructs the source within floating tolerance for
//! pixels with K != 1; pure black maps losslessly.

use pix_core::{ChannelLayout, Error, ImageBuffer, Result, ValueRange};
#[allow(unused_imports)]
use tracing::trace;

/// Converts an RGB buffer to a new (H, W, 4) CMYK buffer.
///
/// Denormalized input is scaled to [0, 1] first, driven by the buffer's
/// range tag. The output is always [`ValueRange::Normalized`].
///
/// # Errors
///
/// Returns [`Error::InvalidChannelCount`] when `src` is not RGB.
///
/// # Example
///
/// ```rust
/// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
/// use pix_ops::convert::rgb_to_cmyk;
///
/// let mut img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Normalized);
/// img.set_pixel(0, 0, &[1.0, 0.0, 0.0]); // pure red
/// let cmyk = rgb_to_cmyk(&img).unwrap();
/// assert_eq!(cmyk.pixel(0, 0), &[0.0, 1.0, 1.0, 0.0]);
/// ```
pub fn rgb_to_cmyk(src: &ImageBuffer) -> Result<ImageBuffer> {
    trace!(h = src.height(), w = src.width(), range = %src.range(), "rgb_to_cmyk");

    if src.layout() != ChannelLayout::Rgb {
        return Err(Error::invalid_channel_count(3, src.channels()));
    }

    let inv = 1.0 / src.range().max_value();
    let mut data = Vec::with_capacity(src.pixel_count() * 4);

    for px in src.data().chunks_exact(3) {
        let r = px[0] * inv;
        let g = px[1] * inv;
        let b = px[2] * inv;
        let k = 1.0 - r.max(g).max(b);
        if k == 1.0 {
            data.extend_from_slice(&[0.0, 0.0, 0.0, 1.0]);
        } else {
            let inv_white = 1.0 - k;
            data.push((1.0 - r - k) / inv_white);
            data.push((1.0 - g - k) / inv_white);
            data.push((1.0 - b - k) / inv_white);
            data.push(k);
        }
    }

    ImageBuffer::from_data(
        src.height(),
        src.width(),
        ChannelLayout::Cmyk,
        ValueRange::Normalized,
        data,
    )
}

/// Converts a CMYK buffer to a new (H, W, 3) RGB buffer.
///
/// The output is always [`ValueRange::Normalized`].
///
/// # Errors
///
/// Returns [`Error::InvalidChannelCount`] when `src` is not CMYK.
pub fn cmyk_to_rgb(src: &ImageBuffer) -> Result<ImageBuffer> {
    trace!(h = src.height(), w = src.width(), range = %src.range(), "cmyk_to_rgb");

    if src.layout() != ChannelLayout::Cmyk {
        return Err(Error::invalid_channel_count(4, src.channels()));
    }

    let inv = 1.0 / src.range().max_value();
    let mut data = Vec::with_capacity(src.pixel_count() * 3);

    for px in src.data().chunks_exact(4) {
        let (c, m, y, k) = (px[0] * inv, px[1] * inv, px[2] * inv, px[3] * inv);
        let inv_white = 1.0 - k;
        data.push((1.0 - c) * inv_white);
        data.push((1.0 - m) * inv_white);
        data.push((1.0 - y) * inv_white);
    }

    ImageBuffer::from_data(
        src.height(),
        src.width(),
        ChannelLayout::Rgb,
        ValueRange::Normalized,
        data,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_primaries() {
        let mut img = ImageBuffer::new(1, 3, ChannelLayout::Rgb, ValueRange::Normalized);
        img.set_pixel(0, 0, &[1.0, 0.0, 0.0]);
        img.set_pixel(0, 1, &[0.0, 1.0, 0.0]);
        img.set_pixel(0, 2, &[0.0, 0.0, 1.0]);

        let cmyk = rgb_to_cmyk(&img).unwrap();
        assert_eq!(cmyk.pixel(0, 0), &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(cmyk.pixel(0, 1), &[1.0, 0.0, 1.0, 0.0]);
        assert_eq!(cmyk.pixel(0, 2), &[1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pure_black_has_zero_cmy() {
        let img = ImageBuffer::new(2, 2, ChannelLayout::Rgb, ValueRange::Normalized);
        let cmyk = rgb_to_cmyk(&img).unwrap();
        for (_, _, px) in cmyk.pixels() {
            assert_eq!(px, &[0.0, 0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_denormalized_zero_not_misread() {
        // The degenerate case the magnitude heuristic could not tell apart:
        // an all-zero denormalized buffer still decomposes as pure black.
        let img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Denormalized);
        let cmyk = rgb_to_cmyk(&img).unwrap();
        assert_eq!(cmyk.pixel(0, 0), &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_denormalized_input_scaled_by_tag() {
        let mut img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Denormalized);
        img.set_pixel(0, 0, &[255.0, 0.0, 0.0]);
        let cmyk = rgb_to_cmyk(&img).unwrap();
        assert_eq!(cmyk.pixel(0, 0), &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(cmyk.range(), ValueRange::Normalized);
    }

    #[test]
    fn test_roundtrip_reconstructs_non_black() {
        let mut img = ImageBuffer::new(2, 2, ChannelLayout::Rgb, ValueRange::Normalized);
        img.set_pixel(0, 0, &[0.8, 0.3, 0.1]);
        img.set_pixel(0, 1, &[0.2, 0.9, 0.4]);
        img.set_pixel(1, 0, &[0.5, 0.5, 0.5]);
        img.set_pixel(1, 1, &[1.0, 1.0, 1.0]);

        let back = cmyk_to_rgb(&rgb_to_cmyk(&img).unwrap()).unwrap();
        for (got, want) in back.data().iter().zip(img.data()) {
            assert_relative_eq!(got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_pure_black_roundtrip_lossless() {
        let img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Normalized);
        let back = cmyk_to_rgb(&rgb_to_cmyk(&img).unwrap()).unwrap();
        assert_eq!(back.pixel(0, 0), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_channel_count_contracts() {
        let rgb = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Normalized);
        let cmyk = ImageBuffer::new(1, 1, ChannelLayout::Cmyk, ValueRange::Normalized);
        assert!(matches!(
            rgb_to_cmyk(&cmyk),
            Err(Error::InvalidChannelCount { expected: 3, got: 4 })
        ));
        assert!(matches!(
            cmyk_to_rgb(&rgb),
            Err(Error::InvalidChannelCount { expected: 4, got: 3 })
        ));
    }
}
