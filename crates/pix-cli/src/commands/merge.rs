//! Merge command
//!
//! Sums layers element-wise, optionally weighted. The sum is not
//! clamped by the operation itself; values above 255 clip at PNG
//! encoding.

use crate::MergeArgs;
use anyhow::{Result, bail};
use pix_ops::composite::{Layer, merge, merge_weighted};
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: MergeArgs, verbose: bool) -> Result<()> {
    trace!(layers = args.inputs.len(), "merge::run");

    let layers: Vec<_> = args
        .inputs
        .iter()
        .map(|p| super::load_image(p))
        .collect::<Result<_>>()?;

    let merged = match &args.weights {
        None => merge(&layers)?,
        Some(list) => {
            let weights = super::parse_floats(list)?;
            if weights.len() != layers.len() {
                bail!(
                    "got {} weights for {} layers",
                    weights.len(),
                    layers.len()
                );
            }
            let weighted: Vec<Layer<'_>> = layers
                .iter()
                .zip(&weights)
                .map(|(buffer, &weight)| Layer::weighted(buffer, weight))
                .collect();
            merge_weighted(&weighted)?
        }
    };

    info!(layers = layers.len(), weighted = args.weights.is_some(), "layers merged");
    if verbose {
        println!("Merged {} layers", layers.len());
    }

    super::save_png(&args.output, &merged)
}
