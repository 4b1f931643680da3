//! Extract command
//!
//! Isolates one RGB channel or one CMYK-style channel view.

use crate::ExtractArgs;
use anyhow::{Result, bail};
use pix_ops::channels::{extract_cmyk, extract_rgb};
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: ExtractArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), space = %args.space, channel = args.channel, "extract::run");

    let image = super::load_image(&args.input)?;

    let extracted = match args.space.to_lowercase().as_str() {
        "rgb" => extract_rgb(&image, args.channel)?,
        "cmyk" => extract_cmyk(&image, args.channel)?,
        other => bail!("unknown channel space {other:?}: expected \"rgb\" or \"cmyk\""),
    };

    info!(space = %args.space, channel = args.channel, "channel extracted");
    if verbose {
        println!("Extracted {} channel {} from {}", args.space, args.channel, args.input.display());
    }

    super::save_png(&args.output, &extracted)
}
