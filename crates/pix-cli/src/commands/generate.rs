//! Gen command
//!
//! Generates a built-in test card and writes it as PNG.

use crate::GenArgs;
use anyhow::{Result, bail};
use pix_ops::pattern;
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: GenArgs, verbose: bool) -> Result<()> {
    trace!(card = %args.card, "generate::run");

    let card = match args.card.to_lowercase().as_str() {
        "swatch" => pattern::swatch_3x3()?,
        "bars" | "tv" => pattern::tv_bars()?,
        other => bail!("unknown card {other:?}: expected \"swatch\" or \"bars\""),
    };

    info!(h = card.height(), w = card.width(), "card generated");
    if verbose {
        println!("Generated {} card ({}x{})", args.card, card.height(), card.width());
    }

    super::save_png(&args.output, &card)
}
