//! Error types for pix-core operations.
//!
//! This module provides a unified error handling system for buffer
//! construction, region selection, and the transformation operations
//! built on top of the core types.
//!
//! # Overview
//!
//! The [`Error`] enum covers all failure modes that can occur during:
//! - Buffer construction (data length vs declared shape)
//! - Region painting (color arity, selector bounds)
//! - Channel extraction and color-space conversion (channel count, index)
//! - Compositing (layer shapes) and filtering (kernel size)
//!
//! Every error is raised synchronously at the violated precondition,
//! before any partial mutation where feasible. Nothing is retried or
//! recovered internally; the caller decides.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::buffer::ImageBuffer`] - Construction and accessor checks
//! - [`crate::selector::AxisSelector`] - Index resolution
//! - `pix-ops` - All transformation preconditions

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during raster image processing operations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// A component sequence has the wrong length for the buffer.
    ///
    /// Returned when a paint color's length differs from the buffer's
    /// channel count, or when raw data does not match a declared shape.
    #[error("dimension mismatch: expected {expected} components, got {got}")]
    DimensionMismatch {
        /// Expected component count
        expected: usize,
        /// Actual component count
        got: usize,
    },

    /// The buffer has the wrong channel count for an operation.
    ///
    /// RGB-only operations require 3 channels, CMYK-only operations 4.
    #[error("invalid channel count: operation requires {expected} channels, buffer has {got}")]
    InvalidChannelCount {
        /// Channel count the operation requires
        expected: usize,
        /// Channel count the buffer has
        got: usize,
    },

    /// A channel index lies outside the valid enumerated set.
    #[error("invalid index {index}: must be below {limit}")]
    InvalidIndex {
        /// The offending index
        index: usize,
        /// Exclusive upper bound of the valid set
        limit: usize,
    },

    /// Layers passed to a compositing operation differ in shape.
    #[error("shape mismatch: {a_height}x{a_width}x{a_channels} vs {b_height}x{b_width}x{b_channels}")]
    ShapeMismatch {
        /// First layer height
        a_height: usize,
        /// First layer width
        a_width: usize,
        /// First layer channels
        a_channels: usize,
        /// Second layer height
        b_height: usize,
        /// Second layer width
        b_width: usize,
        /// Second layer channels
        b_channels: usize,
    },

    /// A single region index resolves outside the buffer extent.
    ///
    /// Range selectors clamp; single indices do not.
    #[error("index {index} out of bounds for axis of length {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Axis length the index was resolved against
        len: usize,
    },

    /// A range selector was given a zero step.
    #[error("range selector step must be nonzero")]
    InvalidStep,

    /// The spatial filter kernel is even or non-positive.
    #[error("invalid kernel size {size}: must be odd and at least 1")]
    InvalidKernelSize {
        /// The offending kernel size
        size: usize,
    },

    /// A compositing operation received no layers.
    #[error("cannot merge an empty layer stack")]
    EmptyStack,
}

impl Error {
    /// Creates a [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidChannelCount`] error.
    #[inline]
    pub fn invalid_channel_count(expected: usize, got: usize) -> Self {
        Self::InvalidChannelCount { expected, got }
    }

    /// Creates an [`Error::InvalidIndex`] error.
    #[inline]
    pub fn invalid_index(index: usize, limit: usize) -> Self {
        Self::InvalidIndex { index, limit }
    }

    /// Creates a [`Error::ShapeMismatch`] error from two (H, W, C) shapes.
    #[inline]
    pub fn shape_mismatch(a: (usize, usize, usize), b: (usize, usize, usize)) -> Self {
        Self::ShapeMismatch {
            a_height: a.0,
            a_width: a.1,
            a_channels: a.2,
            b_height: b.0,
            b_width: b.1,
            b_channels: b.2,
        }
    }

    /// Creates an [`Error::IndexOutOfBounds`] error.
    #[inline]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. } | Self::InvalidIndex { .. })
    }

    /// Returns `true` if this is a shape- or channel-related error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. }
                | Self::DimensionMismatch { .. }
                | Self::InvalidChannelCount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_display() {
        let err = Error::index_out_of_bounds(7, 3);
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = Error::shape_mismatch((3, 3, 3), (2, 3, 3));
        let msg = err.to_string();
        assert!(msg.contains("3x3x3"));
        assert!(msg.contains("2x3x3"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_invalid_kernel_size_display() {
        let err = Error::InvalidKernelSize { size: 4 };
        assert!(err.to_string().contains('4'));
        assert!(!err.is_bounds_error());
    }
}
