//! Per-pixel recoloring.
//!
//! The transform walks every pixel, skips the ones the preservation rules
//! exempt, blends the rest toward the target colour, then runs the HSV
//! saturation/brightness adjustment on the blended value. The adjustment
//! deliberately sees the tinted colour, not the original, so intensity and
//! the HSV factors compound.

use image::RgbaImage;

use crate::error::{Result, RetintError};
use crate::types::{Colour, RecolorParams};

/// Recolor a whole image. Dimensions are preserved; alpha is carried
/// through untouched.
pub fn recolor(image: &RgbaImage, params: &RecolorParams) -> Result<RgbaImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(RetintError::Dimension {
            message: format!("Cannot recolor a {}x{} image", image.width(), image.height()),
        });
    }

    let mut out = if params.grayscale_first {
        grayscale(image)
    } else {
        image.clone()
    };

    for pixel in out.pixels_mut() {
        let colour = Colour::from_rgba(pixel.0);
        pixel.0 = recolor_colour(colour, params).to_rgba();
    }

    Ok(out)
}

/// Recolor a single colour value.
///
/// Applies the same preservation rules and transform as [`recolor`], so a
/// caller rewriting hex-valued fields in a settings file gets results
/// consistent with the processed images.
pub fn recolor_colour(colour: Colour, params: &RecolorParams) -> Colour {
    if params.preserve_transparency && colour.a == 0 {
        return colour;
    }
    if params.preserve_white && colour.is_near_white(params.white_threshold) {
        return colour;
    }
    if params.preserve_black && colour.is_near_black(params.black_threshold) {
        return colour;
    }

    let tinted = Colour::new(
        blend_channel(colour.r, params.target.r, params.intensity),
        blend_channel(colour.g, params.target.g, params.intensity),
        blend_channel(colour.b, params.target.b, params.intensity),
        colour.a,
    );

    tinted.adjust_hsv(params.saturation, params.brightness)
}

/// Flatten an image to luma-equal RGB, keeping alpha.
pub fn grayscale(image: &RgbaImage) -> RgbaImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let luma = Colour::from_rgba(pixel.0).luma();
        pixel.0 = [luma, luma, luma, pixel.0[3]];
    }
    out
}

fn blend_channel(channel: u8, target: u8, intensity: f32) -> u8 {
    let blended = channel as f32 * (1.0 - intensity) + target as f32 * intensity;
    blended.round().clamp(0.0, 255.0) as u8
}
