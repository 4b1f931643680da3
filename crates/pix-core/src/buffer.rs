//! Image buffer type for raster processing.
//!
//! This module provides [`ImageBuffer`], the dense H×W×C container every
//! transformation operates on, together with [`ChannelLayout`], the
//! tagged channel-count variant that keeps a buffer RGB (3) or CMYK (4)
//! for its whole lifetime.
//!
//! # Memory Layout
//!
//! Components are stored row-major, top-to-bottom, channels interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! # Value Ranges
//!
//! Every buffer carries a [`ValueRange`] tag - [`Normalized`] components in
//! [0, 1] or [`Denormalized`] whole numbers in [0, 255] - decided at
//! ingestion and threaded through every transform. Conversion between the
//! two is the explicit [`normalize`](ImageBuffer::normalize) /
//! [`denormalize`](ImageBuffer::denormalize) pair; no operation infers the
//! range from pixel magnitudes.
//!
//! # Ownership
//!
//! Region painting mutates a buffer through `&mut`; every other
//! transformation borrows its input and returns a freshly allocated
//! output, so the caller's original is never aliased.
//!
//! # Usage
//!
//! ```rust
//! use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
//!
//! let mut img = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
//! img.set_pixel(0, 0, &[0.0, 1.0, 1.0]);
//! assert_eq!(img.pixel(0, 0), &[0.0, 1.0, 1.0]);
//! assert_eq!(img.pixel(2, 1), &[0.0, 0.0, 0.0]);
//! ```
//!
//! [`Normalized`]: ValueRange::Normalized
//! [`Denormalized`]: ValueRange::Denormalized

use crate::{Error, Result, ValueRange};

/// Channel layout of a buffer: RGB or CMYK.
///
/// The layout is fixed at construction, which makes a buffer with a
/// channel count outside {3, 4} unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Three channels: red, green, blue.
    Rgb,
    /// Four channels: cyan, magenta, yellow, black.
    Cmyk,
}

impl ChannelLayout {
    /// Number of channels in this layout.
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Cmyk => 4,
        }
    }
}

/// Owned dense H×W×C image buffer.
///
/// Components are `f32` in the range named by the buffer's
/// [`ValueRange`] tag. The 8-bit integral form exists only at the
/// I/O and display boundary via [`to_u8`](Self::to_u8).
///
/// # Example
///
/// ```rust
/// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
///
/// let img = ImageBuffer::new(8, 11, ChannelLayout::Rgb, ValueRange::Normalized);
/// assert_eq!(img.shape(), (8, 11, 3));
/// ```
#[derive(Clone, PartialEq)]
pub struct ImageBuffer {
    /// Component data, row-major, channels interleaved
    data: Vec<f32>,
    /// Number of rows (H)
    height: usize,
    /// Number of columns (W)
    width: usize,
    /// Channel layout (C = 3 or 4)
    layout: ChannelLayout,
    /// Value range the components are expressed in
    range: ValueRange,
}

impl ImageBuffer {
    /// Creates a new zero-filled buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
    ///
    /// let img = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
    /// assert!(img.data().iter().all(|&v| v == 0.0));
    /// ```
    pub fn new(height: usize, width: usize, layout: ChannelLayout, range: ValueRange) -> Self {
        let data = vec![0.0; height * width * layout.count()];
        Self { data, height, width, layout, range }
    }

    /// Creates a buffer from existing component data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when `data.len()` is not
    /// exactly `height * width * layout.count()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
    ///
    /// let data = vec![0.5; 2 * 2 * 3];
    /// let img = ImageBuffer::from_data(2, 2, ChannelLayout::Rgb, ValueRange::Normalized, data).unwrap();
    /// assert_eq!(img.pixel(1, 1), &[0.5, 0.5, 0.5]);
    /// ```
    pub fn from_data(
        height: usize,
        width: usize,
        layout: ChannelLayout,
        range: ValueRange,
        data: Vec<f32>,
    ) -> Result<Self> {
        let expected = height * width * layout.count();
        if data.len() != expected {
            return Err(Error::dimension_mismatch(expected, data.len()));
        }
        Ok(Self { data, height, width, layout, range })
    }

    /// Creates a zero-filled buffer with the same shape and range as `self`.
    #[inline]
    pub fn zeros_like(&self) -> Self {
        Self::new(self.height, self.width, self.layout, self.range)
    }

    /// Returns the number of rows (H).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns (W).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of channels (C).
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.count()
    }

    /// Returns the channel layout.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Returns the value-range tag.
    #[inline]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Returns the shape as (H, W, C).
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.layout.count())
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    /// Returns a reference to the raw component data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the raw component data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the buffer and returns its component data.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Component offset of pixel (row, col).
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * self.layout.count()
    }

    /// Returns the components of the pixel at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &[f32] {
        debug_assert!(row < self.height && col < self.width, "pixel out of bounds");
        let offset = self.offset(row, col);
        &self.data[offset..offset + self.layout.count()]
    }

    /// Returns the pixel at (row, col), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, row: usize, col: usize) -> Option<&[f32]> {
        if row < self.height && col < self.width {
            Some(self.pixel(row, col))
        } else {
            None
        }
    }

    /// Sets the pixel at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is out of bounds or `components` does not have
    /// exactly C elements. Fallible region painting lives in `pix-ops`.
    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, components: &[f32]) {
        debug_assert!(row < self.height && col < self.width, "pixel out of bounds");
        let offset = self.offset(row, col);
        let count = self.layout.count();
        self.data[offset..offset + count].copy_from_slice(components);
    }

    /// Fills the entire buffer with one pixel value.
    ///
    /// # Panics
    ///
    /// Panics if `components` does not have exactly C elements.
    pub fn fill(&mut self, components: &[f32]) {
        for chunk in self.data.chunks_exact_mut(self.layout.count()) {
            chunk.copy_from_slice(components);
        }
    }

    /// Returns the components of row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        debug_assert!(row < self.height, "row out of bounds");
        let start = row * self.width * self.layout.count();
        let end = start + self.width * self.layout.count();
        &self.data[start..end]
    }

    /// Iterates over all pixels with their coordinates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
    ///
    /// let img = ImageBuffer::new(2, 2, ChannelLayout::Rgb, ValueRange::Normalized);
    /// for (row, col, px) in img.pixels() {
    ///     assert_eq!(px, &[0.0, 0.0, 0.0]);
    ///     assert!(row < 2 && col < 2);
    /// }
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, &[f32])> {
        (0..self.height)
            .flat_map(move |r| (0..self.width).map(move |c| (r, c, self.pixel(r, c))))
    }

    /// Returns a new buffer with `f` applied to every component.
    ///
    /// Shape and range tag are preserved; use
    /// [`with_range`](Self::with_range) when the function moves the data
    /// into the other range.
    pub fn map_components<F>(&self, f: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            height: self.height,
            width: self.width,
            layout: self.layout,
            range: self.range,
        }
    }

    /// Retags the buffer's value range without touching the data.
    ///
    /// This is a zero-cost reinterpretation for callers that have already
    /// rescaled the components themselves. For actual conversion use
    /// [`normalize`](Self::normalize) / [`denormalize`](Self::denormalize).
    #[inline]
    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.range = range;
        self
    }

    /// Converts to the [0, 1] floating range.
    ///
    /// Divides every component by 255. Already-normalized buffers are
    /// returned as an unchanged copy.
    pub fn normalize(&self) -> Self {
        match self.range {
            ValueRange::Normalized => self.clone(),
            ValueRange::Denormalized => self
                .map_components(|v| v / 255.0)
                .with_range(ValueRange::Normalized),
        }
    }

    /// Converts to the [0, 255] whole-number range.
    ///
    /// Multiplies by 255, rounds, and clamps to [0, 255].
    /// Already-denormalized buffers are returned as an unchanged copy.
    pub fn denormalize(&self) -> Self {
        match self.range {
            ValueRange::Denormalized => self.clone(),
            ValueRange::Normalized => self
                .map_components(|v| (v * 255.0).round().clamp(0.0, 255.0))
                .with_range(ValueRange::Denormalized),
        }
    }

    /// Returns the 8-bit integral form for the I/O and display boundary.
    ///
    /// Components are scaled to [0, 255] according to the range tag, then
    /// rounded and clamped.
    pub fn to_u8(&self) -> Vec<u8> {
        let scale = match self.range {
            ValueRange::Normalized => 255.0,
            ValueRange::Denormalized => 1.0,
        };
        self.data
            .iter()
            .map(|&v| (v * scale).round().clamp(0.0, 255.0) as u8)
            .collect()
    }
}

impl std::fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("layout", &self.layout)
            .field("range", &self.range)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_is_zeroed() {
        let img = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
        assert_eq!(img.shape(), (3, 3, 3));
        assert!(img.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_data_wrong_size() {
        let result = ImageBuffer::from_data(
            2,
            2,
            ChannelLayout::Rgb,
            ValueRange::Normalized,
            vec![0.0; 5],
        );
        assert!(matches!(result, Err(Error::DimensionMismatch { expected: 12, got: 5 })));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut img = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
        img.set_pixel(1, 2, &[0.1, 0.2, 0.3]);
        assert_eq!(img.pixel(1, 2), &[0.1, 0.2, 0.3]);
        assert_eq!(img.pixel(0, 0), &[0.0, 0.0, 0.0]);
        assert!(img.get_pixel(3, 0).is_none());
    }

    #[test]
    fn test_fill() {
        let mut img = ImageBuffer::new(2, 2, ChannelLayout::Cmyk, ValueRange::Normalized);
        img.fill(&[0.25, 0.5, 0.75, 1.0]);
        for (_, _, px) in img.pixels() {
            assert_eq!(px, &[0.25, 0.5, 0.75, 1.0]);
        }
    }

    #[test]
    fn test_row_slice() {
        let mut img = ImageBuffer::new(2, 3, ChannelLayout::Rgb, ValueRange::Normalized);
        img.set_pixel(1, 0, &[1.0, 0.0, 0.0]);
        let row = img.row(1);
        assert_eq!(row.len(), 9);
        assert_eq!(&row[0..3], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_denormalize_normalize_roundtrip() {
        // Integral values survive denormalize(normalize(b)) exactly.
        let data: Vec<f32> = (0..12).map(|v| (v * 20) as f32).collect();
        let img = ImageBuffer::from_data(
            2,
            2,
            ChannelLayout::Rgb,
            ValueRange::Denormalized,
            data.clone(),
        )
        .unwrap();
        let roundtrip = img.normalize().denormalize();
        assert_eq!(roundtrip.range(), ValueRange::Denormalized);
        assert_eq!(roundtrip.data(), &data[..]);
    }

    #[test]
    fn test_normalize_denormalize_recovers_within_tolerance() {
        let data = vec![0.0, 0.25, 0.5, 0.75, 1.0, 0.1, 0.9, 0.33, 0.66, 0.05, 0.95, 0.5];
        let img = ImageBuffer::from_data(
            2,
            2,
            ChannelLayout::Rgb,
            ValueRange::Normalized,
            data.clone(),
        )
        .unwrap();
        let roundtrip = img.denormalize().normalize();
        for (got, want) in roundtrip.data().iter().zip(&data) {
            assert_relative_eq!(got, want, epsilon = 1.0 / 255.0);
        }
    }

    #[test]
    fn test_to_u8_clamps() {
        let img = ImageBuffer::from_data(
            1,
            1,
            ChannelLayout::Rgb,
            ValueRange::Normalized,
            vec![-0.5, 0.5, 1.5],
        )
        .unwrap();
        assert_eq!(img.to_u8(), vec![0, 128, 255]);
    }

    #[test]
    fn test_map_components_preserves_shape() {
        let img = ImageBuffer::new(2, 3, ChannelLayout::Rgb, ValueRange::Normalized);
        let out = img.map_components(|v| v + 1.0);
        assert_eq!(out.shape(), (2, 3, 3));
        assert!(out.data().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_zeros_like() {
        let img = ImageBuffer::new(4, 5, ChannelLayout::Cmyk, ValueRange::Denormalized);
        let z = img.zeros_like();
        assert_eq!(z.shape(), img.shape());
        assert_eq!(z.range(), ValueRange::Denormalized);
        assert!(z.data().iter().all(|&v| v == 0.0));
    }
}
