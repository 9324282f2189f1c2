//! Debug overlay rendering
//!
//! Builds a separate image from an already-classified frame:
//! - every pixel recolored to its class color (red, blue or black)
//! - an inset thumbnail of the frame in the bottom-right corner
//! - a swatch of the detected state in the bottom-left corner
//!
//! The input image is never modified.

use crate::config::Thresholds;
use crate::pipeline::{classify_pixel, BeaconState, Rgb};
use image::{imageops, Rgb as Pixel, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Inset and swatch widths are this fraction of the reference edge
const INSET_DIVISOR: u32 = 5;

const RED: Rgb = [255, 0, 0];
const BLUE: Rgb = [0, 0, 255];

/// Recolor every pixel to the display color of its class
pub fn classification_mask(image: &RgbImage, thresholds: &Thresholds) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        Pixel(classify_pixel(image.get_pixel(x, y).0, thresholds).display_color())
    })
}

/// Swatch colors for a state, left to right
pub fn swatch_colors(state: BeaconState) -> &'static [Rgb] {
    match state {
        BeaconState::Red => &[RED],
        BeaconState::Blue => &[BLUE],
        BeaconState::BlueRed => &[BLUE, RED],
        BeaconState::RedBlue => &[RED, BLUE],
        BeaconState::Undetermined => &[],
    }
}

/// Render the full debug overlay for a classified image
pub fn render_overlay(image: &RgbImage, state: BeaconState, thresholds: &Thresholds) -> RgbImage {
    let mut canvas = classification_mask(image, thresholds);
    let edge = (thresholds.reference_edge / INSET_DIVISOR).max(1);

    let inset = inset_thumbnail(image, edge);
    let x = i64::from(canvas.width()) - i64::from(inset.width());
    let y = i64::from(canvas.height()) - i64::from(inset.height());
    imageops::overlay(&mut canvas, &inset, x, y);

    draw_swatch(&mut canvas, state, edge);
    canvas
}

/// Aspect-preserving thumbnail whose longest edge is at most `edge`
fn inset_thumbnail(image: &RgbImage, edge: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let longest = width.max(height).max(1);
    if longest <= edge {
        return image.clone();
    }
    let scale = |n: u32| ((u64::from(n) * u64::from(edge) / u64::from(longest)) as u32).max(1);
    imageops::thumbnail(image, scale(width), scale(height))
}

/// Draw the state swatch, `width` wide and half as tall, at the bottom-left
fn draw_swatch(canvas: &mut RgbImage, state: BeaconState, width: u32) {
    let colors = swatch_colors(state);
    if colors.is_empty() {
        return;
    }

    let height = (width / 2).max(1);
    let part = (width / colors.len() as u32).max(1);
    let top = canvas.height() as i32 - height as i32;

    for (i, color) in colors.iter().enumerate() {
        let left = (i as u32 * part) as i32;
        draw_filled_rect_mut(canvas, Rect::at(left, top).of_size(part, height), Pixel(*color));
    }
}
