//! # pix-ops
//!
//! Pure transformations over [`pix_core::ImageBuffer`].
//!
//! Every operation in this crate either borrows its input and returns a
//! freshly allocated output, or - for region painting only - mutates the
//! buffer behind an explicit `&mut`. Nothing here performs I/O, logs
//! beyond trace spans, or recovers from a violated precondition.
//!
//! # Modules
//!
//! - [`paint`] - In-place region painting over selector cross products
//! - [`channels`] - RGB channel extraction and CMYK-style channel masking
//! - [`convert`] - RGB <-> CMYK color-space conversion
//! - [`composite`] - Plain and weighted layer summation
//! - [`tone`] - Logarithmic contrast / exponential intensity remapping
//! - [`filter`] - Mean (box) filter with reflect-at-edge padding
//! - [`gray`] - Three grayscale reduction formulas
//! - [`invert`] - Component inversion
//! - [`pattern`] - Generated test cards (color swatch, TV bars)
//!
//! # Example
//!
//! ```rust
//! use pix_core::{AxisSelector, ChannelLayout, ImageBuffer, ValueRange};
//! use pix_ops::{gray, paint};
//!
//! let mut img = ImageBuffer::new(4, 4, ChannelLayout::Rgb, ValueRange::Normalized);
//! paint::paint(
//!     &mut img,
//!     AxisSelector::all(),
//!     AxisSelector::all(),
//!     &[0.5, 0.5, 0.5],
//! ).unwrap();
//! let g = gray::gray_average(&img).unwrap();
//! assert_eq!(g.pixel(0, 0), &[0.5, 0.5, 0.5]);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - rayon row sweep in the spatial filter (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channels;
pub mod composite;
pub mod convert;
pub mod filter;
pub mod gray;
pub mod invert;
pub mod paint;
pub mod pattern;
pub mod tone;

pub use composite::Layer;
pub use gray::GrayMethod;
