//! Tone remapping: logarithmic contrast and exponential intensity.
//!
//! [`adjust`] selects a transform by the sign of its factor:
//!
//! - `factor == 0` - identity, returns an unchanged copy
//! - `factor < 0`  - contrast: `c * log10(1 + x)` with `c = 1/log10(2)`,
//!   lifting dark regions (the constant is chosen so 1 maps to 1)
//! - `factor > 0`  - intensity: `(e^x - 1) / (e - 1)`, lifting bright
//!   regions (maps 0 to 0 and 1 to 1)
//!
//! The factor's magnitude is accepted but not used to blend the result
//! with the original: the full transform applies for any nonzero factor.
//! This mirrors the reference behavior exactly and is a documented gap -
//! a graduated blend would be a behavioral change, not a fix.

use pix_core::{ImageBuffer, ValueRange};
#[allow(unused_imports)]
use tracing::trace;

// 1/log10(2) = log2(10); scales log10(1+x) so that x = 1 maps to 1.
const LOG2_10: f64 = 3.321928094887362;

/// Remaps tone by `factor` in [-1, 1].
///
/// Negative factors apply the logarithmic contrast transform, positive
/// factors the exponential intensity transform, and zero returns an
/// unchanged copy (range tag preserved). Nonzero factors scale the input
/// to [0, 1] first, driven by the buffer's range tag, and always produce
/// a [`ValueRange::Normalized`] output.
///
/// # Example
///
/// ```rust
/// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
/// use pix_ops::tone::adjust;
///
/// let mut img = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Normalized);
/// img.fill(&[1.0, 1.0, 1.0]);
///
/// // Both transforms fix the endpoints: 1 stays 1.
/// assert_eq!(adjust(&img, -0.8).pixel(0, 0), &[1.0, 1.0, 1.0]);
/// ```
pub fn adjust(src: &ImageBuffer, factor: f32) -> ImageBuffer {
    trace!(factor, range = %src.range(), "adjust");

    if factor == 0.0 {
        return src.clone();
    }

    let inv = 1.0 / src.range().max_value();
    let transformed = if factor < 0.0 {
        src.map_components(|v| contrast(v * inv))
    } else {
        src.map_components(|v| intensity(v * inv))
    };
    transformed.with_range(ValueRange::Normalized)
}

/// Logarithmic contrast curve: `c * log10(1 + x)`, fixing 0 and 1.
#[inline]
fn contrast(x: f32) -> f32 {
    LOG2_10 as f32 * (1.0 + x).log10()
}

/// Exponential intensity curve: `(e^x - 1) / (e - 1)`, fixing 0 and 1.
#[inline]
fn intensity(x: f32) -> f32 {
    (x.exp() - 1.0) / (std::f32::consts::E - 1.0)
}
