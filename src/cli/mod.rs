pub mod completions;
pub mod extract;
pub mod pattern;
pub mod recolor;
pub mod tint;

use clap::{Args, Parser, Subcommand};

use crate::error::{Result, RetintError};
use crate::types::{Colour, RecolorParams};

/// retint - recolor desktop theme assets
#[derive(Parser, Debug)]
#[command(name = "retint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recolor theme images toward a target colour
    Recolor(recolor::RecolorArgs),

    /// Generate a procedural overlay pattern
    Pattern(pattern::PatternArgs),

    /// Extract dominant colours from an image
    Extract(extract::ExtractArgs),

    /// Transform individual hex colour values
    Tint(tint::TintArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Shared recolor transform flags.
#[derive(Args, Debug)]
pub struct TransformOpts {
    /// Target colour (hex, e.g. #ff4500)
    #[arg(long, short = 'c')]
    pub color: Option<Colour>,

    /// Blend fraction toward the target (0 = no change, 1 = replace)
    #[arg(long, default_value_t = 1.0)]
    pub intensity: f32,

    /// Saturation multiplier
    #[arg(long, default_value_t = 1.0)]
    pub saturation: f32,

    /// Brightness multiplier
    #[arg(long, default_value_t = 1.0)]
    pub brightness: f32,

    /// Near-white preservation cutoff per channel
    #[arg(long, default_value_t = 245)]
    pub white_threshold: u8,

    /// Near-black preservation cutoff per channel
    #[arg(long, default_value_t = 30)]
    pub black_threshold: u8,

    /// Tint fully transparent pixels instead of preserving them
    #[arg(long)]
    pub tint_transparent: bool,

    /// Tint near-white pixels instead of preserving them
    #[arg(long)]
    pub tint_white: bool,

    /// Tint near-black pixels instead of preserving them
    #[arg(long)]
    pub tint_black: bool,

    /// Flatten to grayscale before tinting
    #[arg(long)]
    pub grayscale: bool,
}

impl TransformOpts {
    /// Build recolor parameters; fails if no target colour was given.
    pub fn to_params(&self) -> Result<RecolorParams> {
        let target = self.color.ok_or_else(|| RetintError::Format {
            message: "No target colour specified".to_string(),
            help: Some("Pass --color with a hex value, e.g. --color '#ff4500'".to_string()),
        })?;

        Ok(RecolorParams::new(target)
            .with_intensity(self.intensity)
            .with_saturation(self.saturation)
            .with_brightness(self.brightness)
            .with_thresholds(self.white_threshold, self.black_threshold)
            .with_preservation(!self.tint_transparent, !self.tint_white, !self.tint_black)
            .with_grayscale_first(self.grayscale))
    }
}
