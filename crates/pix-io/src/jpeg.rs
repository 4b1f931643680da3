//! JPEG format support.
//!
//! Decode-only: JPEG files arrive as 8-bit RGB or grayscale and map into
//! the loader's (H, W, 3) denormalized contract. Writing goes through
//! PNG.

use crate::{IoError, IoResult};
use pix_core::ImageBuffer;
use std::fs::File;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Reads a JPEG file into an (H, W, 3) denormalized buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    trace!(path = %path.as_ref().display(), "jpeg::read");

    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(std::io::BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing image info after decode".into()))?;

    let width = info.width as usize;
    let height = info.height as usize;

    let rgb: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels,
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
        jpeg_decoder::PixelFormat::L16 => {
            // Big-endian sample pairs; keep the high byte.
            pixels.chunks_exact(2).flat_map(|s| [s[0], s[0], s[0]]).collect()
        }
        other => {
            return Err(IoError::UnsupportedColorType(format!("{:?}", other)));
        }
    };

    debug!(width, height, "jpeg decoded");
    crate::buffer_from_rgb8(height, width, rgb)
}
