//! Generated test cards.
//!
//! Small synthetic images built on region painting, useful for exercising
//! the transformation pipeline without loading anything from disk:
//!
//! - [`swatch_3x3`] - a 3x3 hand-placed color swatch
//! - [`tv_bars`] - an 8x11 retro television test card
//!
//! Both cards are RGB and normalized.

use crate::paint::paint;
use pix_core::{AxisSelector, ChannelLayout, ImageBuffer, Result, ValueRange};

/// Builds the 3x3 color swatch.
///
/// Layout, row by row: cyan, white, red / magenta, mid-gray, green /
/// yellow, untouched black, blue. Pixel (2, 1) is deliberately left at
/// zero.
pub fn swatch_3x3() -> Result<ImageBuffer> {
    let mut img = ImageBuffer::new(3, 3, ChannelLayout::Rgb, ValueRange::Normalized);
    let cells: [(usize, usize, [f32; 3]); 8] = [
        (0, 0, [0.0, 1.0, 1.0]), // cyan
        (0, 1, [1.0, 1.0, 1.0]), // white
        (0, 2, [1.0, 0.0, 0.0]), // red
        (1, 0, [1.0, 0.0, 1.0]), // magenta
        (1, 1, [0.5, 0.5, 0.5]), // mid-gray
        (1, 2, [0.0, 1.0, 0.0]), // green
        (2, 0, [1.0, 1.0, 0.0]), // yellow
        (2, 2, [0.0, 0.0, 1.0]), // blue
    ];
    for (row, col, color) in cells {
        paint(&mut img, row.into(), col.into(), &color)?;
    }
    Ok(img)
}

/// Builds the 8x11 TV test card.
///
/// Six color bars fill the top six rows (yellow, cyan, green, magenta,
/// red, blue), an eight-step grayscale ramp `(7 - i) / 7` fills the
/// bottom two, and the whole card is scaled by 0.6.
pub fn tv_bars() -> Result<ImageBuffer> {
    let mut img = ImageBuffer::new(8, 11, ChannelLayout::Rgb, ValueRange::Normalized);
    let bar_rows = AxisSelector::range(Some(0), Some(6));

    let bars: [(AxisSelector, [f32; 3]); 6] = [
        (AxisSelector::index(0), [1.0, 1.0, 0.0]),                // yellow
        (AxisSelector::range(Some(1), Some(3)), [0.0, 1.0, 1.0]), // cyan
        (AxisSelector::range(Some(3), Some(5)), [0.0, 1.0, 0.0]), // green
        (AxisSelector::range(Some(5), Some(7)), [1.0, 0.0, 1.0]), // magenta
        (AxisSelector::range(Some(7), Some(9)), [1.0, 0.0, 0.0]), // red
        (AxisSelector::range(Some(9), Some(11)), [0.0, 0.0, 1.0]), // blue
    ];
    for (cols, color) in bars {
        paint(&mut img, bar_rows, cols, &color)?;
    }

    let ramp_rows = AxisSelector::range(Some(6), Some(8));
    for i in 0..8 {
        let level = (7 - i) as f32 / 7.0;
        paint(&mut img, ramp_rows, AxisSelector::index(i), &[level, level, level])?;
    }

    Ok(img.map_components(|v| v * 0.6))
}
