//! Recolor parameter value object.
//!
//! All knobs for a recolor pass live here, constructed once per invocation
//! and passed by value. Defaults match the common case: full preservation,
//! neutral saturation/brightness.

use serde::{Deserialize, Serialize};

use crate::types::Colour;

/// Parameters for a recolor pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecolorParams {
    /// Colour every non-preserved pixel is blended toward.
    pub target: Colour,

    /// Blend fraction toward the target: 0 = no change, 1 = fully replaced.
    #[serde(default = "default_intensity")]
    pub intensity: f32,

    /// Saturation multiplier applied after tinting (1.0 = unchanged).
    #[serde(default = "default_factor")]
    pub saturation: f32,

    /// Brightness multiplier applied after tinting (1.0 = unchanged).
    #[serde(default = "default_factor")]
    pub brightness: f32,

    /// Per-channel cutoff above which a pixel counts as near-white.
    #[serde(default = "default_white_threshold")]
    pub white_threshold: u8,

    /// Per-channel cutoff below which a pixel counts as near-black.
    #[serde(default = "default_black_threshold")]
    pub black_threshold: u8,

    /// Leave fully transparent pixels untouched.
    #[serde(default = "default_true")]
    pub preserve_transparency: bool,

    /// Leave near-white pixels untouched.
    #[serde(default = "default_true")]
    pub preserve_white: bool,

    /// Leave near-black pixels untouched.
    #[serde(default = "default_true")]
    pub preserve_black: bool,

    /// Flatten the image to luma-equal RGB before tinting.
    #[serde(default)]
    pub grayscale_first: bool,
}

fn default_intensity() -> f32 {
    1.0
}

fn default_factor() -> f32 {
    1.0
}

fn default_white_threshold() -> u8 {
    245
}

fn default_black_threshold() -> u8 {
    30
}

fn default_true() -> bool {
    true
}

impl RecolorParams {
    /// Create parameters for a full-intensity recolor toward `target`.
    pub fn new(target: Colour) -> Self {
        Self {
            target,
            intensity: default_intensity(),
            saturation: default_factor(),
            brightness: default_factor(),
            white_threshold: default_white_threshold(),
            black_threshold: default_black_threshold(),
            preserve_transparency: true,
            preserve_white: true,
            preserve_black: true,
            grayscale_first: false,
        }
    }

    /// Set the blend intensity (clamped to `[0, 1]`).
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity.clamp(0.0, 1.0);
        self
    }

    /// Set the saturation factor.
    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation.max(0.0);
        self
    }

    /// Set the brightness factor.
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness.max(0.0);
        self
    }

    /// Set the near-white and near-black thresholds.
    pub fn with_thresholds(mut self, white: u8, black: u8) -> Self {
        self.white_threshold = white;
        self.black_threshold = black;
        self
    }

    /// Set the preservation flags.
    pub fn with_preservation(mut self, transparency: bool, white: bool, black: bool) -> Self {
        self.preserve_transparency = transparency;
        self.preserve_white = white;
        self.preserve_black = black;
        self
    }

    /// Enable the grayscale pre-pass.
    pub fn with_grayscale_first(mut self, grayscale_first: bool) -> Self {
        self.grayscale_first = grayscale_first;
        self
    }
}
