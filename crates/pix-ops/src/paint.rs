//! In-place region painting.
//!
//! Painting is the one mutating operation in the toolkit: it writes a
//! color into every pixel addressed by a row selector crossed with a
//! column selector, directly in the caller's buffer.
//!
//! The two selectors resolve independently against the buffer's height
//! and width, and the resolved index sets combine via nested iteration -
//! every row paired with every column, not zipped.
//!
//! # Example
//!
//! ```rust
//! use pix_core::{AxisSelector, ChannelLayout, ImageBuffer, ValueRange};
//! use pix_ops::paint::paint;
//!
//! let mut img = ImageBuffer::new(8, 11, ChannelLayout::Rgb, ValueRange::Normalized);
//!
//! // A six-row yellow bar over columns 1..3
//! paint(
//!     &mut img,
//!     AxisSelector::range(Some(0), Some(6)),
//!     AxisSelector::range(Some(1), Some(3)),
//!     &[1.0, 1.0, 0.0],
//! ).unwrap();
//!
//! assert_eq!(img.pixel(0, 1), &[1.0, 1.0, 0.0]);
//! assert_eq!(img.pixel(0, 0), &[0.0, 0.0, 0.0]);
//! ```

use pix_core::{AxisSelector, Error, ImageBuffer, Result};
#[allow(unused_imports)]
use tracing::trace;

/// Paints `color` into every pixel of the selected region, in place.
///
/// Returns the mutated buffer to allow chaining. Validation happens
/// before any pixel is written: the color arity first, then single-index
/// bounds during selector resolution. Range selectors clamp to the
/// buffer; single indices do not.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] when `color.len()` differs from the
///   buffer's channel count
/// - [`Error::IndexOutOfBounds`] when a single row/column index lies
///   outside the buffer
/// - [`Error::InvalidStep`] for a zero-step range selector
pub fn paint<'a>(
    buffer: &'a mut ImageBuffer,
    rows: AxisSelector,
    cols: AxisSelector,
    color: &[f32],
) -> Result<&'a mut ImageBuffer> {
    trace!(h = buffer.height(), w = buffer.width(), "paint");

    if color.len() != buffer.channels() {
        return Err(Error::dimension_mismatch(buffer.channels(), color.len()));
    }

    let row_indices = rows.resolve(buffer.height())?;
    let col_indices = cols.resolve(buffer.width())?;

    for &r in &row_indices {
        for &c in &col_indices {
            buffer.set_pixel(r, c, color);
        }
    }

    Ok(buffer)
}
