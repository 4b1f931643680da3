//! Gray command
//!
//! Converts to grayscale with one of the three reduction formulas.

use crate::GrayArgs;
use anyhow::{Result, bail};
use pix_ops::gray::{GrayMethod, to_gray};
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: GrayArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), method = %args.method, "gray::run");

    let method = match args.method.to_lowercase().as_str() {
        "average" | "avg" => GrayMethod::Average,
        "luminosity" | "lum" => GrayMethod::Luminosity,
        "tonality" | "tone" => GrayMethod::Tonality,
        other => bail!(
            "unknown gray method {other:?}: expected \"average\", \"luminosity\" or \"tonality\""
        ),
    };

    let image = super::load_image(&args.input)?;
    let gray = to_gray(&image, method)?;

    info!(method = method.name(), "grayscale converted");
    if verbose {
        println!("Converted {} with {} formula", args.input.display(), method.name());
    }

    super::save_png(&args.output, &gray)
}
