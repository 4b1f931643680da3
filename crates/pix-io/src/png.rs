//! PNG format support.
//!
//! Reads 8-bit and 16-bit PNG files into the loader's (H, W, 3)
//! denormalized contract - grayscale expands to RGB, alpha is dropped,
//! 16-bit samples reduce to their high byte - and writes RGB buffers
//! back out as 8-bit PNG.
//!
//! # Example
//!
//! ```rust,ignore
//! use pix_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use pix_core::{ChannelLayout, ImageBuffer};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Reads a PNG file into an (H, W, 3) denormalized buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    trace!(path = %path.as_ref().display(), "png::read");

    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width as usize;
    let height = info.height as usize;
    let buf = &buf[..info.buffer_size()];

    let rgb: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => buf.to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            buf.chunks_exact(4).flat_map(|px| [px[0], px[1], px[2]]).collect()
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            buf.iter().flat_map(|&g| [g, g, g]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            buf.chunks_exact(2).flat_map(|ga| [ga[0], ga[0], ga[0]]).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            // Big-endian sample pairs; keep the high byte.
            buf.chunks_exact(2).map(|s| s[0]).collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => buf
            .chunks_exact(8)
            .flat_map(|px| [px[0], px[2], px[4]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedColorType(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    debug!(width, height, "png decoded");
    crate::buffer_from_rgb8(height, width, rgb)
}

/// Writes an RGB buffer to an 8-bit PNG file.
///
/// The buffer's 8-bit integral form is encoded; CMYK buffers must be
/// converted to RGB first.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> IoResult<()> {
    trace!(path = %path.as_ref().display(), "png::write");

    if image.layout() != ChannelLayout::Rgb {
        return Err(IoError::EncodeError(
            "CMYK buffers must be converted to RGB before PNG encoding".into(),
        ));
    }

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width() as u32, image.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    writer
        .write_image_data(&image.to_u8())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(())
}
