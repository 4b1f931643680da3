//! Image format detection.
//!
//! Formats are detected by file extension first and confirmed against
//! magic bytes when the file can be opened. An unknown extension with
//! recognizable magic bytes still resolves.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Portable Network Graphics.
    Png,
    /// JPEG/JFIF.
    Jpeg,
    /// Not recognized.
    Unknown,
}

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];
const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];

impl Format {
    /// Guesses the format from the file extension alone.
    pub fn from_extension(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => Self::Png,
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            _ => Self::Unknown,
        }
    }

    /// Detects the format from magic bytes, falling back to the extension.
    pub fn detect(path: &Path) -> IoResult<Self> {
        let mut header = [0u8; 4];
        let read = File::open(path)?.read(&mut header)?;

        if read >= 4 && header == PNG_MAGIC {
            return Ok(Self::Png);
        }
        if read >= 2 && header[..2] == JPEG_MAGIC {
            return Ok(Self::Jpeg);
        }
        Ok(Self::from_extension(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension(Path::new("a.png")), Format::Png);
        assert_eq!(Format::from_extension(Path::new("a.JPG")), Format::Jpeg);
        assert_eq!(Format::from_extension(Path::new("a.jpeg")), Format::Jpeg);
        assert_eq!(Format::from_extension(Path::new("a.webp")), Format::Unknown);
        assert_eq!(Format::from_extension(Path::new("noext")), Format::Unknown);
    }
}
