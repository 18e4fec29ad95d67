//! Pattern specification types.
//!
//! A [`PatternSpec`] fully describes one procedural pattern: which fill
//! routine to run, the two colours it alternates between, and the scale
//! knobs. `size` sets feature scale (bigger squares, wider stripes) while
//! `density` sets repetition (more dots, more rays).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetintError};
use crate::types::Colour;

/// The twelve supported pattern fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Gradient,
    Checkerboard,
    Stripes,
    DiagonalStripes,
    Dots,
    Hexagonal,
    Waves,
    Noise,
    Circles,
    Rays,
    Squares,
    Triangles,
}

impl PatternKind {
    /// All pattern kinds, in display order.
    pub fn all() -> [PatternKind; 12] {
        [
            PatternKind::Gradient,
            PatternKind::Checkerboard,
            PatternKind::Stripes,
            PatternKind::DiagonalStripes,
            PatternKind::Dots,
            PatternKind::Hexagonal,
            PatternKind::Waves,
            PatternKind::Noise,
            PatternKind::Circles,
            PatternKind::Rays,
            PatternKind::Squares,
            PatternKind::Triangles,
        ]
    }

    /// Kebab-case name, as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Gradient => "gradient",
            PatternKind::Checkerboard => "checkerboard",
            PatternKind::Stripes => "stripes",
            PatternKind::DiagonalStripes => "diagonal-stripes",
            PatternKind::Dots => "dots",
            PatternKind::Hexagonal => "hexagonal",
            PatternKind::Waves => "waves",
            PatternKind::Noise => "noise",
            PatternKind::Circles => "circles",
            PatternKind::Rays => "rays",
            PatternKind::Squares => "squares",
            PatternKind::Triangles => "triangles",
        }
    }

    /// True for the one stochastic kind; everything else is deterministic.
    pub fn is_stochastic(self) -> bool {
        matches!(self, PatternKind::Noise)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = RetintError;

    fn from_str(s: &str) -> Result<Self> {
        PatternKind::all()
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| RetintError::Format {
                message: format!("Unknown pattern kind: {}", s),
                help: Some(format!(
                    "Expected one of: {}",
                    PatternKind::all().map(|k| k.name()).join(", ")
                )),
            })
    }
}

/// Supported square canvas resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "512")]
    R512,
    #[serde(rename = "1024")]
    R1024,
    #[serde(rename = "2048")]
    R2048,
    #[serde(rename = "4096")]
    R4096,
}

impl Resolution {
    /// Edge length in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            Resolution::R512 => 512,
            Resolution::R1024 => 1024,
            Resolution::R2048 => 2048,
            Resolution::R4096 => 4096,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::R1024
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels())
    }
}

impl FromStr for Resolution {
    type Err = RetintError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "512" => Ok(Resolution::R512),
            "1024" => Ok(Resolution::R1024),
            "2048" => Ok(Resolution::R2048),
            "4096" => Ok(Resolution::R4096),
            _ => Err(RetintError::Format {
                message: format!("Unsupported resolution: {}", s),
                help: Some("Expected one of: 512, 1024, 2048, 4096".to_string()),
            }),
        }
    }
}

/// A full pattern description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub kind: PatternKind,

    pub primary: Colour,

    pub secondary: Colour,

    /// Feature scale in pixels (stripe width, cell pitch, dot size).
    #[serde(default = "default_size")]
    pub size: u32,

    /// Feature repetition multiplier; higher packs more features in.
    #[serde(default = "default_density")]
    pub density: f32,

    #[serde(default)]
    pub resolution: Resolution,

    /// Gaussian blur radius applied after drawing; 0 disables.
    #[serde(default)]
    pub blur_radius: f32,
}

fn default_size() -> u32 {
    20
}

fn default_density() -> f32 {
    1.0
}

impl PatternSpec {
    /// Create a spec with default scale knobs.
    pub fn new(kind: PatternKind, primary: Colour, secondary: Colour) -> Self {
        Self {
            kind,
            primary,
            secondary,
            size: default_size(),
            density: default_density(),
            resolution: Resolution::default(),
            blur_radius: 0.0,
        }
    }

    /// Set the feature size (floored at 1).
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.max(1);
        self
    }

    /// Set the feature density (floored just above zero).
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density.max(0.1);
        self
    }

    /// Set the canvas resolution.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the post-draw blur radius (negative values disable).
    pub fn with_blur(mut self, blur_radius: f32) -> Self {
        self.blur_radius = blur_radius.max(0.0);
        self
    }
}
