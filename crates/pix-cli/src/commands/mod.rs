//! Command implementations and shared helpers.

pub mod adjust;
pub mod blur;
pub mod extract;
pub mod generate;
pub mod gray;
pub mod invert;
pub mod merge;
pub mod paint;
pub mod sheet;

use anyhow::{Context, Result, bail};
use pix_core::{AxisSelector, ImageBuffer};
use std::path::Path;

/// Loads an image into the (H, W, 3) denormalized contract.
pub fn load_image(path: &Path) -> Result<ImageBuffer> {
    pix_io::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Writes a buffer as 8-bit PNG.
pub fn save_png(path: &Path, image: &ImageBuffer) -> Result<()> {
    pix_io::write_png(path, image).with_context(|| format!("failed to write {}", path.display()))
}

/// Parses a selector argument: `all`, a single index, or
/// `start..stop[..step]` with any endpoint omitted.
pub fn parse_selector(s: &str) -> Result<AxisSelector> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("all") {
        return Ok(AxisSelector::all());
    }
    if !s.contains("..") {
        let index: usize = s.parse().with_context(|| format!("bad index {s:?}"))?;
        return Ok(AxisSelector::index(index));
    }

    let parts: Vec<&str> = s.split("..").collect();
    if parts.len() > 3 {
        bail!("bad range {s:?}: expected start..stop[..step]");
    }
    let endpoint = |p: &str| -> Result<Option<isize>> {
        if p.is_empty() {
            Ok(None)
        } else {
            Ok(Some(p.parse().with_context(|| format!("bad endpoint {p:?}"))?))
        }
    };

    let start = endpoint(parts[0])?;
    let stop = endpoint(parts[1])?;
    let step = match parts.get(2) {
        Some(p) if !p.is_empty() => p.parse().with_context(|| format!("bad step {p:?}"))?,
        _ => 1,
    };
    Ok(AxisSelector::span(start, stop, step))
}

/// Parses a comma-separated float list.
pub fn parse_floats(s: &str) -> Result<Vec<f32>> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .with_context(|| format!("bad number {p:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_forms() {
        assert_eq!(parse_selector("all").unwrap(), AxisSelector::all());
        assert_eq!(parse_selector("5").unwrap(), AxisSelector::index(5));
        assert_eq!(
            parse_selector("1..3").unwrap(),
            AxisSelector::range(Some(1), Some(3))
        );
        assert_eq!(
            parse_selector("..6").unwrap(),
            AxisSelector::range(None, Some(6))
        );
        assert_eq!(
            parse_selector("0..10..2").unwrap(),
            AxisSelector::span(Some(0), Some(10), 2)
        );
        assert_eq!(
            parse_selector("-3..").unwrap(),
            AxisSelector::range(Some(-3), None)
        );
        assert!(parse_selector("x").is_err());
        assert!(parse_selector("1..2..3..4").is_err());
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse_floats("1,0,0.5").unwrap(), vec![1.0, 0.0, 0.5]);
        assert!(parse_floats("1,oops").is_err());
    }
}
