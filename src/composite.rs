//! Pattern compositing.
//!
//! Resizes a pattern to the base image's dimensions and blends it in at a
//! uniform ratio across all four channels.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{Result, RetintError};

/// Blend `pattern` over `base` at `ratio`.
///
/// The pattern is resampled to the base dimensions with Lanczos3 first.
/// `ratio` is clamped to `[0, 1]`; at 0 the base is returned unchanged, at
/// 1 the result is the resized pattern.
pub fn composite(base: &RgbaImage, pattern: &RgbaImage, ratio: f32) -> Result<RgbaImage> {
    if base.width() == 0 || base.height() == 0 {
        return Err(RetintError::Dimension {
            message: "Cannot composite onto a zero-area base image".to_string(),
        });
    }
    if pattern.width() == 0 || pattern.height() == 0 {
        return Err(RetintError::Dimension {
            message: "Cannot composite a zero-area pattern".to_string(),
        });
    }

    let ratio = ratio.clamp(0.0, 1.0);
    if ratio == 0.0 {
        return Ok(base.clone());
    }

    let pattern = if pattern.dimensions() == base.dimensions() {
        pattern.clone()
    } else {
        imageops::resize(pattern, base.width(), base.height(), FilterType::Lanczos3)
    };

    let mut out = base.clone();
    let inv = 1.0 - ratio;
    for (dst, src) in out.pixels_mut().zip(pattern.pixels()) {
        for c in 0..4 {
            let blended = dst.0[c] as f32 * inv + src.0[c] as f32 * ratio;
            dst.0[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(out)
}

/// Load a pattern image from `path` as RGBA.
///
/// Maps read/decode failures to a resource error so callers can tell an
/// unreadable overlay asset apart from a bad input image.
pub fn load_pattern(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| RetintError::Resource {
        path: path.to_path_buf(),
        message: format!("Failed to load pattern: {}", e),
    })?;
    Ok(img.to_rgba8())
}

/// Blend a pattern loaded from `path` over `base`.
///
/// A missing or unreadable pattern file is a non-fatal condition: the base
/// image is returned unchanged rather than failing the whole transform.
pub fn composite_path(base: &RgbaImage, path: &Path, ratio: f32) -> RgbaImage {
    match load_pattern(path) {
        Ok(pattern) => composite(base, &pattern, ratio).unwrap_or_else(|_| base.clone()),
        Err(_) => base.clone(),
    }
}
