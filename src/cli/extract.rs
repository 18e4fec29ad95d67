//! Extract command implementation.
//!
//! Prints dominant colours as hex lines to stdout, or as a JSON array with
//! `--json`.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, RetintError};
use crate::extract::{extract, ExtractStrategy};
use crate::io::load_rgba;
use crate::output::{display_path, plural, Printer};

/// Extract dominant colours from an image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Image to sample colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Maximum number of colours to output
    #[arg(long, default_value_t = 5)]
    pub max: usize,

    /// Extraction strategy (frequency or kmeans)
    #[arg(long, default_value_t = ExtractStrategy::Frequency)]
    pub strategy: ExtractStrategy,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let img = load_rgba(&args.file)?;
    let colours = extract(&img, args.max, args.strategy)?;

    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(colours.len(), "colour", "colours"),
            display_path(&args.file)
        ),
    );

    if args.json {
        let hex: Vec<String> = colours.iter().map(|c| c.to_hex()).collect();
        let rendered = serde_json::to_string_pretty(&hex).map_err(|e| RetintError::Format {
            message: format!("Failed to serialize colours: {}", e),
            help: None,
        })?;
        println!("{}", rendered);
    } else {
        for colour in &colours {
            println!("{}", colour);
        }
    }

    Ok(())
}
