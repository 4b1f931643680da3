//! pix - raster image processing CLI
//!
//! Thin driver over the PIX-RS crates: loads an image (or generates a
//! test card), applies one transformation, and writes the result as PNG.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "pix")]
#[command(author, version, about = "Raster image processing CLI")]
#[command(long_about = "
A small raster processing tool over dense (H, W, C) image buffers.

Examples:
  pix gen bars -o bars.png               # Generate the TV test card
  pix paint in.png -o out.png --rows 0..6 --cols 1..3 --color 1,1,0
  pix extract in.png --space cmyk --channel 0 -o cyan.png
  pix merge r.png g.png b.png -o merged.png
  pix merge c.png m.png y.png k.png -o rgbish.png -w 0.266,0.266,0.266,0.202
  pix adjust in.png --factor -0.8 -o contrast.png
  pix blur in.png --kernel 5 -o smooth.png
  pix gray in.png --method luminosity -o gray.png
  pix invert in.png -o negative.png
  pix sheet a.png b.png c.png -o sheet.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a test card (swatch or bars)
    #[command(visible_alias = "g")]
    Gen(GenArgs),

    /// Paint a color into a rectangular region
    Paint(PaintArgs),

    /// Extract one channel view (RGB or CMYK masking)
    #[command(visible_alias = "x")]
    Extract(ExtractArgs),

    /// Merge layers by summation, optionally weighted
    #[command(visible_alias = "m")]
    Merge(MergeArgs),

    /// Tone adjustment: negative factor = contrast, positive = intensity
    #[command(visible_alias = "a")]
    Adjust(AdjustArgs),

    /// Apply the mean (box) filter
    #[command(visible_alias = "b")]
    Blur(BlurArgs),

    /// Convert to grayscale
    Gray(GrayArgs),

    /// Invert colors
    #[command(visible_alias = "i")]
    Invert(InvertArgs),

    /// Compose inputs into a contact sheet
    #[command(visible_alias = "s")]
    Sheet(SheetArgs),
}

#[derive(Args)]
struct GenArgs {
    /// Card name: "swatch" (3x3) or "bars" (8x11 TV card)
    card: String,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct PaintArgs {
    /// Input image
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Row selector: "all", a single index, or start..stop[..step]
    #[arg(long, default_value = "all")]
    rows: String,

    /// Column selector: same syntax as --rows
    #[arg(long, default_value = "all")]
    cols: String,

    /// Comma-separated color components, one per channel
    #[arg(long)]
    color: String,
}

#[derive(Args)]
struct ExtractArgs {
    /// Input image
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Channel space: "rgb" or "cmyk"
    #[arg(long, default_value = "rgb")]
    space: String,

    /// Channel index (0-2 for RGB, 0-3 for CMYK)
    #[arg(long)]
    channel: usize,
}

#[derive(Args)]
struct MergeArgs {
    /// Input images (two or more recommended)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Comma-separated per-layer weights (defaults to 1 for each)
    #[arg(short, long)]
    weights: Option<String>,
}

#[derive(Args)]
struct AdjustArgs {
    /// Input image
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Factor in [-1, 1]; sign selects the transform
    #[arg(short, long, allow_hyphen_values = true)]
    factor: f32,
}

#[derive(Args)]
struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel size (odd, >= 1)
    #[arg(short, long, default_value = "3")]
    kernel: usize,
}

#[derive(Args)]
struct GrayArgs {
    /// Input image
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Formula: "average", "luminosity" or "tonality"
    #[arg(short, long, default_value = "average")]
    method: String,
}

#[derive(Args)]
struct InvertArgs {
    /// Input image
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct SheetArgs {
    /// Input images, one panel each
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Grid columns
    #[arg(long, default_value = "2")]
    columns: usize,

    /// Cell edge length in pixels
    #[arg(long, default_value = "256")]
    cell: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Gen(args) => commands::generate::run(args, cli.verbose),
        Commands::Paint(args) => commands::paint::run(args, cli.verbose),
        Commands::Extract(args) => commands::extract::run(args, cli.verbose),
        Commands::Merge(args) => commands::merge::run(args, cli.verbose),
        Commands::Adjust(args) => commands::adjust::run(args, cli.verbose),
        Commands::Blur(args) => commands::blur::run(args, cli.verbose),
        Commands::Gray(args) => commands::gray::run(args, cli.verbose),
        Commands::Invert(args) => commands::invert::run(args, cli.verbose),
        Commands::Sheet(args) => commands::sheet::run(args, cli.verbose),
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the default
/// level from warn to debug.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
