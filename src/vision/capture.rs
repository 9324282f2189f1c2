//! Image loading and normalization
//!
//! Decoded images are shrunk so their longest edge matches the reference edge
//! the classification bounds were calibrated for. Images already within the
//! reference edge are left at their own size.

use crate::error::Result;
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Shrink an image to fit inside `edge` x `edge`, preserving aspect ratio
pub fn normalize(image: &DynamicImage, edge: u32) -> RgbImage {
    if image.width() > edge || image.height() > edge {
        image.thumbnail(edge, edge).to_rgb8()
    } else {
        image.to_rgb8()
    }
}

/// Load an image file and normalize it to `edge`
pub fn load_normalized(path: impl AsRef<Path>, edge: u32) -> Result<RgbImage> {
    let path = path.as_ref();
    let image = image::open(path)?;
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(normalize(&image, edge))
}
