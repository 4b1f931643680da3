//! Component inversion.

use pix_core::ImageBuffer;

/// Inverts every component against the buffer's range ceiling.
///
/// Normalized buffers map `x` to `1 - x`, denormalized buffers to
/// `255 - x`. Returns a new buffer with the same shape and range tag;
/// applying the inversion twice recovers the original exactly.
///
/// # Example
///
/// ```rust
/// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
/// use pix_ops::invert::invert;
///
/// let mut img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Normalized);
/// img.fill(&[1.0, 0.25, 0.0]);
/// assert_eq!(invert(&img).pixel(0, 0), &[0.0, 0.75, 1.0]);
/// ```
pub fn invert(src: &ImageBuffer) -> ImageBuffer {
    let ceiling = src.range().max_value();
    src.map_components(|v| ceiling - v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_core::{ChannelLayout, ValueRange};

    #[test]
    fn test_invert_normalized() {
        let mut img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Normalized);
        img.fill(&[0.2, 0.5, 1.0]);
        let out = invert(&img);
        assert_eq!(out.pixel(0, 0), &[0.8, 0.5, 0.0]);
    }

    #[test]
    fn test_invert_denormalized() {
        let mut img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Denormalized);
        img.fill(&[255.0, 100.0, 0.0]);
        let out = invert(&img);
        assert_eq!(out.pixel(0, 0), &[0.0, 155.0, 255.0]);
        assert_eq!(out.range(), ValueRange::Denormalized);
    }

    #[test]
    fn test_invert_is_involution() {
        let mut img = ImageBuffer::new(2, 2, ChannelLayout::Cmyk, ValueRange::Normalized);
        img.fill(&[0.1, 0.4, 0.7, 1.0]);
        assert_eq!(invert(&invert(&img)), img);
    }
}
