//! Adjust command
//!
//! Tone remapping: a negative factor applies the logarithmic contrast
//! transform, a positive one the exponential intensity transform.

use crate::AdjustArgs;
use anyhow::Result;
use pix_ops::tone::adjust;
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: AdjustArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), factor = args.factor, "adjust::run");

    let image = super::load_image(&args.input)?;
    let adjusted = adjust(&image, args.factor);

    let mode = match args.factor {
        f if f < 0.0 => "contrast",
        f if f > 0.0 => "intensity",
        _ => "identity",
    };
    info!(factor = args.factor, mode, "tone adjusted");
    if verbose {
        println!("Applied {} transform (factor {})", mode, args.factor);
    }

    super::save_png(&args.output, &adjusted)
}
