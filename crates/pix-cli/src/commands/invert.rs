//! Invert command
//!
//! Inverts every component against the image's range ceiling.

use crate::InvertArgs;
use anyhow::Result;
use pix_ops::invert::invert;
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: InvertArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), "invert::run");

    let image = super::load_image(&args.input)?;
    let negative = invert(&image);

    info!("colors inverted");
    if verbose {
        println!("Inverted {}", args.input.display());
    }

    super::save_png(&args.output, &negative)
}
