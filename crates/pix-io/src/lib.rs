//! # pix-io
//!
//! Image I/O adapters for PIX-RS.
//!
//! The core toolkit has no file format of its own; this crate is the
//! loader/codec collaborator that feeds it. Decoding always produces an
//! (H, W, 3) buffer tagged [`ValueRange::Denormalized`] - grayscale
//! sources expand to RGB, alpha is dropped - so the range tag is decided
//! exactly once, at ingestion.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pix_io::{read, write_png};
//!
//! // Read any supported format (auto-detected)
//! let image = read("input.jpg")?;
//!
//! // Work in [0, 1], write the result
//! let floats = image.normalize();
//! write_png("output.png", &floats)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Notes |
//! |--------|------|-------|-------|
//! | PNG | Yes | Yes | 8/16-bit, gray and alpha variants collapse to RGB |
//! | JPEG | Yes | No | 8-bit RGB and grayscale |
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "jpeg")]
pub mod jpeg;

#[cfg(feature = "png")]
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
use std::path::Path;

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes with an extension fallback.
/// The result is always an (H, W, 3) buffer tagged
/// [`ValueRange::Denormalized`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the format is not
/// supported, or the payload is corrupted.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let path = path.as_ref();
    let format = Format::detect(path)?;

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Writes an RGB buffer to an 8-bit PNG file.
///
/// Convenience re-dispatch to [`png::write`].
#[cfg(feature = "png")]
pub fn write_png<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> IoResult<()> {
    png::write(path, image)
}

/// Builds the loader-contract buffer from decoded RGB bytes.
pub(crate) fn buffer_from_rgb8(height: usize, width: usize, rgb: Vec<u8>) -> IoResult<ImageBuffer> {
    let data: Vec<f32> = rgb.into_iter().map(|v| v as f32).collect();
    ImageBuffer::from_data(height, width, ChannelLayout::Rgb, ValueRange::Denormalized, data)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_from_rgb8_tags_denormalized() {
        let img = buffer_from_rgb8(1, 2, vec![0, 128, 255, 1, 2, 3]).unwrap();
        assert_eq!(img.shape(), (1, 2, 3));
        assert_eq!(img.range(), ValueRange::Denormalized);
        assert_eq!(img.pixel(0, 0), &[0.0, 128.0, 255.0]);
    }

    #[test]
    fn test_buffer_from_rgb8_length_check() {
        assert!(matches!(
            buffer_from_rgb8(2, 2, vec![0; 5]),
            Err(IoError::DecodeError(_))
        ));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_read_dispatches_by_magic_bytes() {
        // A PNG payload with a lying extension still decodes as PNG.
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("actually-png.jpg");

        let img = buffer_from_rgb8(1, 1, vec![9, 8, 7]).unwrap();
        png::write(&png_path, &img).unwrap();

        let back = read(&png_path).unwrap();
        assert_eq!(back.pixel(0, 0), &[9.0, 8.0, 7.0]);
    }

    #[test]
    fn test_read_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mystery.xyz");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(read(&path), Err(IoError::UnsupportedFormat(_))));
    }
}
