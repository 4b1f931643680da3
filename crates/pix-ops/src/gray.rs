//! Grayscale conversion.
//!
//! Three independent RGB-to-gray reductions, each returning a new
//! (H, W, 3) buffer with the gray value broadcast to all three channels:
//!
//! - [`gray_average`] - `(R + G + B) / 3`
//! - [`gray_luminosity`] - `0.299 R + 0.587 G + 0.114 B` (perceptual)
//! - [`gray_tonality`] - `(max(R,G,B) + min(R,G,B)) / 2` (midgray)
//!
//! A pure-gray input (R = G = B = v) returns v unchanged under all
//! three formulas.

use pix_core::{ChannelLayout, Error, ImageBuffer, Result};
#[allow(unused_imports)]
use tracing::trace;

/// Perceptual luminosity coefficient for the red channel.
///
/// Used in the weighted formula `gray = 0.299*R + 0.587*G + 0.114*B`.
pub const LUMA_R: f32 = 0.299;

/// Perceptual luminosity coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// Perceptual luminosity coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Grayscale reduction formula selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayMethod {
    /// Mean of the three channels.
    #[default]
    Average,
    /// Perceptually weighted sum.
    Luminosity,
    /// Midpoint of the channel extremes.
    Tonality,
}

impl GrayMethod {
    /// Short lowercase name for logs and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Luminosity => "luminosity",
            Self::Tonality => "tonality",
        }
    }
}

/// Converts with the selected [`GrayMethod`].
///
/// # Errors
///
/// Returns [`Error::InvalidChannelCount`] when `src` is not RGB.
pub fn to_gray(src: &ImageBuffer, method: GrayMethod) -> Result<ImageBuffer> {
    match method {
        GrayMethod::Average => gray_average(src),
        GrayMethod::Luminosity => gray_luminosity(src),
        GrayMethod::Tonality => gray_tonality(src),
    }
}

/// Grayscale by channel mean: `(R + G + B) / 3`.
///
/// # Errors
///
/// Returns [`Error::InvalidChannelCount`] when `src` is not RGB.
pub fn gray_average(src: &ImageBuffer) -> Result<ImageBuffer> {
    trace!("gray_average");
    reduce(src, |r, g, b| (r + g + b) / 3.0)
}

/// Grayscale by perceptual weighting: `0.299 R + 0.587 G + 0.114 B`.
///
/// # Errors
///
/// Returns [`Error::InvalidChannelCount`] when `src` is not RGB.
pub fn gray_luminosity(src: &ImageBuffer) -> Result<ImageBuffer> {
    trace!("gray_luminosity");
    reduce(src, |r, g, b| LUMA_R * r + LUMA_G * g + LUMA_B * b)
}

/// Grayscale by tonality (midgray): `(max(R,G,B) + min(R,G,B)) / 2`.
///
/// # Errors
///
/// Returns [`Error::InvalidChannelCount`] when `src` is not RGB.
pub fn gray_tonality(src: &ImageBuffer) -> Result<ImageBuffer> {
    trace!("gray_tonality");
    reduce(src, |r, g, b| (r.max(g).max(b) + r.min(g).min(b)) / 2.0)
}

/// Applies a per-pixel reduction and broadcasts it to all three channels.
fn reduce<F>(src: &ImageBuffer, f: F) -> Result<ImageBuffer>
where
    F: Fn(f32, f32, f32) -> f32,
{
    if src.layout() != ChannelLayout::Rgb {
        return Err(Error::invalid_channel_count(3, src.channels()));
    }

    let mut dst = src.zeros_like();
    for (out, px) in dst.data_mut().chunks_exact_mut(3).zip(src.data().chunks_exact(3)) {
        let gray = f(px[0], px[1], px[2]);
        out.fill(gray);
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pix_core::ValueRange;

    fn sample() -> ImageBuffer {
        let mut img = ImageBuffer::new(1, 2, ChannelLayout::Rgb, ValueRange::Normalized);
        img.set_pixel(0, 0, &[0.9, 0.3, 0.6]);
        img.set_pixel(0, 1, &[0.0, 1.0, 0.5]);
        img
    }

    #[test]
    fn test_all_methods_broadcast_three_equal_channels() {
        for method in [GrayMethod::Average, GrayMethod::Luminosity, GrayMethod::Tonality] {
            let out = to_gray(&sample(), method).unwrap();
            for (_, _, px) in out.pixels() {
                assert_eq!(px[0], px[1], "{}", method.name());
                assert_eq!(px[1], px[2], "{}", method.name());
            }
        }
    }

    #[test]
    fn test_pure_gray_is_unchanged() {
        let mut img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Normalized);
        img.fill(&[0.42, 0.42, 0.42]);
        for method in [GrayMethod::Average, GrayMethod::Luminosity, GrayMethod::Tonality] {
            let out = to_gray(&img, method).unwrap();
            assert_relative_eq!(out.pixel(0, 0)[0], 0.42, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_average_value() {
        let out = gray_average(&sample()).unwrap();
        assert_relative_eq!(out.pixel(0, 0)[0], 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_luminosity_value() {
        let out = gray_luminosity(&sample()).unwrap();
        let expected = 0.299 * 0.9 + 0.587 * 0.3 + 0.114 * 0.6;
        assert_relative_eq!(out.pixel(0, 0)[0], expected, epsilon = 1e-6);
    }

    #[test]
    fn test_tonality_value() {
        let out = gray_tonality(&sample()).unwrap();
        assert_relative_eq!(out.pixel(0, 0)[0], (0.9 + 0.3) / 2.0, epsilon = 1e-6);
        assert_relative_eq!(out.pixel(0, 1)[0], 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_requires_rgb() {
        let cmyk = ImageBuffer::new(1, 1, ChannelLayout::Cmyk, ValueRange::Normalized);
        assert!(matches!(
            gray_average(&cmyk),
            Err(Error::InvalidChannelCount { expected: 3, got: 4 })
        ));
    }
}
