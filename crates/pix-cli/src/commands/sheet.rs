//! Sheet command
//!
//! Composes the inputs into a contact-sheet grid, one panel per file,
//! labeled by file stem.

use crate::SheetArgs;
use anyhow::Result;
use pix_view::ContactSheet;
#[allow(unused_imports)]
use tracing::{info, trace};

pub fn run(args: SheetArgs, verbose: bool) -> Result<()> {
    trace!(panels = args.inputs.len(), "sheet::run");

    let mut sheet = ContactSheet::new()
        .with_columns(args.columns)
        .with_cell_size(args.cell, args.cell);

    for path in &args.inputs {
        let label = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("panel")
            .to_string();
        sheet = sheet.add(label, super::load_image(path)?);
    }

    let rendered = sheet.render()?;
    info!(panels = rendered.panels.len(), "sheet rendered");

    if verbose {
        for panel in &rendered.panels {
            println!(
                "  {:<24} at ({}, {}) {}x{}",
                panel.label, panel.x, panel.y, panel.width, panel.height
            );
        }
    }

    super::save_png(&args.output, &rendered.image)
}
