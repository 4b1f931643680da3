//! Paint command
//!
//! Paints a color into the region selected by row/column selectors.
//! Loaded images are denormalized, so color components are given in
//! [0, 255].

use crate::PaintArgs;
use anyhow::Result;
use pix_ops::paint::paint;
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: PaintArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), "paint::run");

    let mut image = super::load_image(&args.input)?;
    let rows = super::parse_selector(&args.rows)?;
    let cols = super::parse_selector(&args.cols)?;
    let color = super::parse_floats(&args.color)?;

    paint(&mut image, rows, cols, &color)?;

    info!(rows = %args.rows, cols = %args.cols, "region painted");
    if verbose {
        println!("Painted rows {} x cols {} in {}", args.rows, args.cols, args.input.display());
    }

    super::save_png(&args.output, &image)
}
