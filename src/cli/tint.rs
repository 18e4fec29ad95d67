//! Tint command implementation.
//!
//! Applies the recolor transform to individual hex colour values. Useful
//! for rewriting colour fields in theme settings files so they stay
//! consistent with the recolored images: each input line maps to one output
//! line on stdout.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::recolor::recolor_colour;
use crate::types::Colour;

use super::TransformOpts;

/// Transform individual hex colour values
#[derive(Args, Debug)]
pub struct TintArgs {
    /// Hex colours to transform
    #[arg(required = true)]
    pub colours: Vec<Colour>,

    #[command(flatten)]
    pub transform: TransformOpts,
}

pub fn run(args: TintArgs, printer: &Printer) -> Result<()> {
    let params = args.transform.to_params()?;

    for colour in &args.colours {
        println!("{}", recolor_colour(*colour, &params));
    }

    printer.status(
        "Tinted",
        &format!(
            "{} toward {}",
            plural(args.colours.len(), "colour", "colours"),
            params.target
        ),
    );

    Ok(())
}
