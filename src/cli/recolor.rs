//! Recolor command implementation.
//!
//! Loads each input image, applies the recolor transform, optionally blends
//! an overlay pattern in, and writes the result as PNG into the output
//! directory under the source file name.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::composite::{composite, load_pattern};
use crate::error::{Result, RetintError};
use crate::io::{load_rgba, save_png};
use crate::output::{display_path, plural, Printer};
use crate::recolor::recolor;
use crate::types::RecolorParams;

use super::TransformOpts;

/// Recolor theme images toward a target colour
#[derive(Args, Debug)]
pub struct RecolorArgs {
    /// Input images to process (PNG or JPEG)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "recolored")]
    pub output: PathBuf,

    /// YAML file with recolor parameters (overrides the transform flags)
    #[arg(long)]
    pub params: Option<PathBuf>,

    #[command(flatten)]
    pub transform: TransformOpts,

    /// Pattern image to blend over each result
    #[arg(long)]
    pub pattern: Option<PathBuf>,

    /// Pattern blend ratio (0 = none, 1 = pattern only)
    #[arg(long, default_value_t = 0.3)]
    pub pattern_blend: f32,
}

pub fn run(args: RecolorArgs, printer: &Printer) -> Result<()> {
    let params = load_params(&args)?;

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| RetintError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let pattern = match &args.pattern {
        Some(path) => match load_pattern(path) {
            Ok(img) => Some(img),
            Err(e) => {
                printer.warning("Skipping", &format!("overlay: {}", e));
                None
            }
        },
        None => None,
    };

    let mut processed = 0;
    for file in &args.files {
        let img = load_rgba(file)?;
        printer.status(
            "Recoloring",
            &format!("{} ({}x{})", display_path(file), img.width(), img.height()),
        );

        let mut out = recolor(&img, &params)?;

        if let Some(pattern) = &pattern {
            if args.pattern_blend > 0.0 {
                out = composite(&out, pattern, args.pattern_blend)?;
            }
        }

        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let out_path = args.output.join(format!("{}.png", stem));
        save_png(&out, &out_path)?;
        processed += 1;
    }

    printer.status(
        "Finished",
        &format!(
            "{} -> {}",
            plural(processed, "image", "images"),
            display_path(&args.output)
        ),
    );

    Ok(())
}

fn load_params(args: &RecolorArgs) -> Result<RecolorParams> {
    match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| RetintError::Io {
                path: path.clone(),
                message: format!("Failed to read params file: {}", e),
            })?;
            serde_yaml::from_str(&text).map_err(|e| RetintError::Format {
                message: format!("Invalid params file {}: {}", path.display(), e),
                help: Some("Expected YAML with at least a `target` hex colour".to_string()),
            })
        }
        None => args.transform.to_params(),
    }
}
