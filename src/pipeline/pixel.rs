//! Single-pixel color classification

use crate::config::Thresholds;

/// An RGB sample, one byte per channel
pub type Rgb = [u8; 3];

/// Color class of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    Red,
    Blue,
    Neither,
}

impl PixelClass {
    /// Display color for debug overlays
    pub fn display_color(self) -> Rgb {
        match self {
            PixelClass::Red => [255, 0, 0],
            PixelClass::Blue => [0, 0, 255],
            PixelClass::Neither => [0, 0, 0],
        }
    }
}

/// Classify one RGB sample.
///
/// The blue test runs first and wins if both would match.
#[inline]
pub fn classify_pixel([r, g, b]: Rgb, thresholds: &Thresholds) -> PixelClass {
    let blue = &thresholds.blue;
    if r < blue.r_max && g < blue.g_max && b > blue.b_min {
        return PixelClass::Blue;
    }

    let red = &thresholds.red;
    if r > red.r_min && g < red.g_max && b < red.b_max {
        return PixelClass::Red;
    }

    PixelClass::Neither
}
