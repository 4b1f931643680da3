//! Row/column selectors for region operations.
//!
//! An [`AxisSelector`] describes which indices of one image axis (rows or
//! columns) an operation touches: either a single index or a contiguous
//! range with a step. Selectors are resolved against the axis length at
//! the moment they are applied and do not persist beyond one call.
//!
//! # Resolution Rules
//!
//! - A single index must lie inside the axis; otherwise resolution fails
//!   with [`Error::IndexOutOfBounds`].
//! - A range follows the standard slice clamping rule: negative start/stop
//!   count from the end of the axis, out-of-range endpoints clamp to the
//!   axis, and the step must be nonzero (negative steps walk backwards).
//!   A clamped-empty range resolves to no indices, which is not an error.
//!
//! # Example
//!
//! ```rust
//! use pix_core::AxisSelector;
//!
//! // Single row
//! let rows = AxisSelector::index(2);
//! assert_eq!(rows.resolve(8).unwrap(), vec![2]);
//!
//! // Columns 1..3
//! let cols = AxisSelector::range(Some(1), Some(3));
//! assert_eq!(cols.resolve(11).unwrap(), vec![1, 2]);
//!
//! // Every other column, clamped to the axis
//! let cols = AxisSelector::span(Some(0), Some(100), 2);
//! assert_eq!(cols.resolve(5).unwrap(), vec![0, 2, 4]);
//! ```
//!
//! # Used By
//!
//! - `pix-ops` region painting - resolves a row and a column selector
//!   independently, then visits their cross product.

use crate::{Error, Result};

/// A row or column selection over one image axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSelector {
    /// Exactly one index. Out-of-range indices fail resolution.
    Index(usize),
    /// A contiguous range with a step, clamped against the axis.
    ///
    /// `None` endpoints mean "from the start" / "to the end" (swapped for
    /// negative steps). Negative endpoints count from the end of the axis.
    Range {
        /// First index (inclusive), or `None` for the axis default.
        start: Option<isize>,
        /// End index (exclusive), or `None` for the axis default.
        stop: Option<isize>,
        /// Stride between indices; must be nonzero.
        step: isize,
    },
}

impl AxisSelector {
    /// Selects a single index.
    #[inline]
    pub const fn index(i: usize) -> Self {
        Self::Index(i)
    }

    /// Selects `start..stop` with step 1.
    #[inline]
    pub const fn range(start: Option<isize>, stop: Option<isize>) -> Self {
        Self::Range { start, stop, step: 1 }
    }

    /// Selects `start..stop` with an explicit step.
    #[inline]
    pub const fn span(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self::Range { start, stop, step }
    }

    /// Selects the whole axis.
    #[inline]
    pub const fn all() -> Self {
        Self::Range { start: None, stop: None, step: 1 }
    }

    /// Resolves this selector against an axis of length `len`.
    ///
    /// Returns the concrete index list in visiting order.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] for a single index outside the axis
    /// - [`Error::InvalidStep`] for a zero step
    pub fn resolve(&self, len: usize) -> Result<Vec<usize>> {
        match *self {
            Self::Index(i) => {
                if i < len {
                    Ok(vec![i])
                } else {
                    Err(Error::index_out_of_bounds(i, len))
                }
            }
            Self::Range { start, stop, step } => {
                if step == 0 {
                    return Err(Error::InvalidStep);
                }
                let (start, stop) = clamp_endpoints(start, stop, step, len);
                let mut indices = Vec::new();
                let mut i = start;
                if step > 0 {
                    while i < stop {
                        indices.push(i as usize);
                        i += step;
                    }
                } else {
                    while i > stop {
                        indices.push(i as usize);
                        i += step;
                    }
                }
                Ok(indices)
            }
        }
    }
}

impl From<usize> for AxisSelector {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

/// Applies the standard slice clamping rule to range endpoints.
///
/// Mirrors the usual sequence-slicing semantics: negative endpoints count
/// from the end, out-of-range endpoints clamp, and defaults depend on the
/// step direction. For negative steps the clamped stop may be -1, meaning
/// "one before the first element" (exclusive).
fn clamp_endpoints(start: Option<isize>, stop: Option<isize>, step: isize, len: usize) -> (isize, isize) {
    let len = len as isize;
    let (lo_default, hi_default) = if step > 0 { (0, len) } else { (len - 1, -1) };

    let clamp = |v: Option<isize>, default: isize| -> isize {
        match v {
            None => default,
            Some(mut v) => {
                if v < 0 {
                    v += len;
                }
                if v < 0 {
                    if step < 0 { -1 } else { 0 }
                } else if v >= len {
                    if step < 0 { len - 1 } else { len }
                } else {
                    v
                }
            }
        }
    };

    (clamp(start, lo_default), clamp(stop, hi_default))
}
