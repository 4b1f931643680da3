//! # pix-view
//!
//! Contact-sheet rendering for PIX-RS.
//!
//! The core toolkit makes no guarantee that composited or tone-adjusted
//! buffers are display-ready; this crate is the viewer collaborator that
//! takes a mapping of label to buffer and composes it into a single grid
//! image with a display convention applied: every panel is brought into
//! the [0, 1] range (CMYK panels convert to RGB first) and out-of-range
//! components are clipped.
//!
//! There is no windowing layer - the rendered sheet is an ordinary
//! [`ImageBuffer`] that callers hand to `pix-io`, and panel labels travel
//! in the returned [`Panel`] metadata rather than being rasterized.
//!
//! # Example
//!
//! ```rust
//! use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
//! use pix_view::ContactSheet;
//!
//! let a = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
//! let b = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
//!
//! let sheet = ContactSheet::new()
//!     .with_cell_size(32, 32)
//!     .add("original", a)
//!     .add("processed", b)
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(sheet.panels.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod sheet;

pub use sheet::{ContactSheet, Panel, Sheet, ViewError, ViewResult};
