// inputmodule/src/framebuffer/grey.rs
//! Greyscale column encoder for the 9x34 LED matrix.
//!
//! Columns carry 34 raw intensity bytes each; the device stages them and
//! swaps the whole frame in on commit. Intensities run through a piecewise
//! remap that keeps perceived contrast at low brightness. The curve has to
//! stay exactly as-is for visual parity with existing firmware setups.

use crate::constants::{HEIGHT, WIDTH};
use crate::framebuffer::{average_brightness, PixelGrid};
use crate::types::Rgb;
use crate::Result;

/// Remap a pixel's average brightness onto the display's perceptual curve:
/// above 200 unchanged, above 150 scaled by 0.8, above 100 by 0.5, above 50
/// unchanged, everything below doubled.
pub fn perceived_brightness(pixel: Rgb) -> u8 {
    let brightness = average_brightness(pixel);
    let remapped = if brightness > 200.0 {
        brightness
    } else if brightness > 150.0 {
        brightness * 0.8
    } else if brightness > 100.0 {
        brightness * 0.5
    } else if brightness > 50.0 {
        brightness
    } else {
        brightness * 2.0
    };
    remapped as u8
}

/// Convert an RGB image into nine greyscale columns ready for staging
pub fn image_columns(image: &PixelGrid) -> Result<[[u8; HEIGHT]; WIDTH]> {
    image.ensure_dims(WIDTH, HEIGHT)?;

    let mut cols = [[0u8; HEIGHT]; WIDTH];
    for (x, col) in cols.iter_mut().enumerate() {
        for (y, cell) in col.iter_mut().enumerate() {
            *cell = perceived_brightness(image.get(x, y));
        }
    }
    Ok(cols)
}
