//! Layer compositing by summation.
//!
//! [`merge`] sums a stack of same-shape layers into a new buffer;
//! [`merge_weighted`] scales each layer by an equalization weight first.
//! No clamping is applied in either case - overlapping bright layers can
//! exceed the valid range, and callers normalize afterwards if the result
//! is headed for display.
//!
//! The weighted form exists to reconstruct an approximate RGB image from
//! independently scaled channel views; the weights are empirically chosen
//! equalization coefficients, not derived algorithmically.

use pix_core::{Error, ImageBuffer, Result};
#[allow(unused_imports)]
use tracing::trace;

/// A buffer reference paired with a compositing weight.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    /// The layer's pixel data.
    pub buffer: &'a ImageBuffer,
    /// Equalization weight applied during [`merge_weighted`].
    pub weight: f32,
}

impl<'a> Layer<'a> {
    /// Wraps a buffer with the default weight of 1.
    #[inline]
    pub fn new(buffer: &'a ImageBuffer) -> Self {
        Self { buffer, weight: 1.0 }
    }

    /// Wraps a buffer with an explicit weight.
    #[inline]
    pub fn weighted(buffer: &'a ImageBuffer, weight: f32) -> Self {
        Self { buffer, weight }
    }
}

/// Sums all layers element-wise into a new buffer.
///
/// The result has the shape and range tag of the first layer.
///
/// # Errors
///
/// - [`Error::EmptyStack`] when `layers` is empty
/// - [`Error::ShapeMismatch`] when any layer's (H, W, C) differs from
///   the first
///
/// # Example
///
/// ```rust
/// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
/// use pix_ops::composite::merge;
///
/// let mut a = ImageBuffer::new(1, 1, ChannelLayout::Rgb, ValueRange::Normalized);
/// a.fill(&[0.25, 0.0, 0.0]);
/// let merged = merge(&[a.clone(), a]).unwrap();
/// assert_eq!(merged.pixel(0, 0), &[0.5, 0.0, 0.0]);
/// ```
pub fn merge(layers: &[ImageBuffer]) -> Result<ImageBuffer> {
    trace!(layers = layers.len(), "merge");

    let first = layers.first().ok_or(Error::EmptyStack)?;
    let mut acc = first.zeros_like();

    for layer in layers {
        if layer.shape() != first.shape() {
            return Err(Error::shape_mismatch(first.shape(), layer.shape()));
        }
        for (out, &v) in acc.data_mut().iter_mut().zip(layer.data()) {
            *out += v;
        }
    }
    Ok(acc)
}

/// Sums `layer * weight` for every layer into a new buffer.
///
/// Same shape contract as [`merge`].
///
/// # Errors
///
/// - [`Error::EmptyStack`] when `layers` is empty
/// - [`Error::ShapeMismatch`] when any layer's shape differs from the
///   first
pub fn merge_weighted(layers: &[Layer<'_>]) -> Result<ImageBuffer> {
    trace!(layers = layers.len(), "merge_weighted");

    let first = layers.first().ok_or(Error::EmptyStack)?;
    let mut acc = first.buffer.zeros_like();

    for layer in layers {
        if layer.buffer.shape() != first.buffer.shape() {
            return Err(Error::shape_mismatch(first.buffer.shape(), layer.buffer.shape()));
        }
        for (out, &v) in acc.data_mut().iter_mut().zip(layer.buffer.data()) {
            *out += v * layer.weight;
        }
    }
    Ok(acc)
}
