//! # pix-core
//!
//! Core types for raster image processing.
//!
//! This crate provides the foundational types used throughout the PIX-RS
//! workspace:
//!
//! - [`ImageBuffer`] - Dense H×W×C buffer, row-major, channels interleaved
//! - [`ChannelLayout`] - RGB (3) or CMYK (4), fixed for a buffer's lifetime
//! - [`ValueRange`] - Explicit normalized/denormalized tag, never inferred
//! - [`AxisSelector`] - Row/column selection for region operations
//! - [`Error`] / [`Result`] - Unified error type for all preconditions
//!
//! ## Design Philosophy
//!
//! The value range of a buffer is **tagged, not guessed**. A buffer is
//! tagged [`Normalized`](ValueRange::Normalized) ([0, 1] floats) or
//! [`Denormalized`](ValueRange::Denormalized) ([0, 255] whole numbers)
//! once at ingestion, and every transform branches on the tag:
//!
//! ```rust
//! use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
//!
//! let bytes = ImageBuffer::new(2, 2, ChannelLayout::Rgb, ValueRange::Denormalized);
//! let floats = bytes.normalize();
//! assert_eq!(floats.range(), ValueRange::Normalized);
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of PIX-RS and has no internal
//! dependencies. All other PIX-RS crates depend on `pix-core`:
//!
//! ```text
//! pix-core (this crate)
//!    ^
//!    |
//!    +-- pix-ops (transformations)
//!    +-- pix-io (codecs)
//!    +-- pix-view (contact sheets)
//!    +-- pix-cli (binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod range;
pub mod selector;

// Re-exports for convenience
pub use buffer::{ChannelLayout, ImageBuffer};
pub use error::{Error, Result};
pub use range::ValueRange;
pub use selector::AxisSelector;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pix_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{ChannelLayout, ImageBuffer};
    pub use crate::error::{Error, Result};
    pub use crate::range::ValueRange;
    pub use crate::selector::AxisSelector;
}
