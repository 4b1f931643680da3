//! Blur command
//!
//! Applies the mean (box) filter with reflect-at-edge padding.

use crate::BlurArgs;
use anyhow::Result;
use pix_ops::filter::mean_filter;
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: BlurArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), kernel = args.kernel, "blur::run");

    let image = super::load_image(&args.input)?;

    if verbose {
        println!(
            "Applying mean filter (kernel={}) to {}",
            args.kernel,
            args.input.display()
        );
    }

    let smoothed = mean_filter(&image, args.kernel)?;
    info!(kernel = args.kernel, "mean filter applied");

    super::save_png(&args.output, &smoothed)
}
