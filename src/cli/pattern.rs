//! Pattern command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::io::save_png;
use crate::output::{display_path, Printer};
use crate::pattern::{synthesize, synthesize_at};
use crate::types::{Colour, PatternKind, PatternSpec, Resolution};

/// Edge length used for preview renders.
const PREVIEW_EDGE: u32 = 300;

/// Generate a procedural overlay pattern
#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Pattern kind (e.g. checkerboard, dots, waves)
    #[arg(long, short)]
    pub kind: PatternKind,

    /// Primary colour
    #[arg(long, default_value = "#ffffff")]
    pub primary: Colour,

    /// Secondary colour
    #[arg(long, default_value = "#000000")]
    pub secondary: Colour,

    /// Feature size in pixels
    #[arg(long, default_value_t = 20)]
    pub size: u32,

    /// Feature density multiplier
    #[arg(long, default_value_t = 1.0)]
    pub density: f32,

    /// Canvas resolution (512, 1024, 2048, or 4096)
    #[arg(long, default_value = "1024")]
    pub resolution: Resolution,

    /// Gaussian blur radius applied after drawing
    #[arg(long, default_value_t = 0.0)]
    pub blur: f32,

    /// Render a small preview instead of the full resolution
    #[arg(long)]
    pub preview: bool,

    /// Output file
    #[arg(long, short, default_value = "pattern.png")]
    pub output: PathBuf,
}

pub fn run(args: PatternArgs, printer: &Printer) -> Result<()> {
    let spec = PatternSpec::new(args.kind, args.primary, args.secondary)
        .with_size(args.size)
        .with_density(args.density)
        .with_resolution(args.resolution)
        .with_blur(args.blur);

    let img = if args.preview {
        synthesize_at(&spec, PREVIEW_EDGE)?
    } else {
        synthesize(&spec)?
    };

    printer.status(
        "Generating",
        &format!("{} ({}x{})", args.kind, img.width(), img.height()),
    );

    save_png(&img, &args.output)?;
    printer.status("Finished", &display_path(&args.output));

    Ok(())
}
