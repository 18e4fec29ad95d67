//! Image loading and saving.
//!
//! Inputs (PNG or JPEG) are normalized to RGBA on load; outputs are written
//! as PNG with the alpha channel intact.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, RetintError};

/// Load an image and normalize it to RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| RetintError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgba8();

    if img.width() == 0 || img.height() == 0 {
        return Err(RetintError::Dimension {
            message: format!("{} is a zero-area image", path.display()),
        });
    }

    Ok(img)
}

/// Write an RGBA image as PNG.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| RetintError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
