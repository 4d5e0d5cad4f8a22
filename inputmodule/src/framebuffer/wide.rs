// inputmodule/src/framebuffer/wide.rs
//! Column encoder for the 300x400 secondary display.
//!
//! Each column packs 400 rows into 50 bytes, bit `y % 8` of byte `y / 8`.
//! Polarity is inverted relative to the LED matrix: pixels whose average
//! brightness is below the midpoint are lit. That asymmetry matches the
//! hardware as observed and is kept as-is rather than normalized.

use crate::constants::{WIDE_COLUMN_BYTES, WIDE_HEIGHT, WIDE_WIDTH};
use crate::framebuffer::{average_brightness, PixelGrid};
use crate::Result;

/// Whether a pixel counts as lit on the wide display (dark pixel = on)
fn is_dark(pixel: crate::types::Rgb) -> bool {
    average_brightness(pixel) < 255.0 / 2.0
}

/// Pack one column of the image. `x` must be within the wide geometry.
pub fn pack_column(image: &PixelGrid, x: usize) -> [u8; WIDE_COLUMN_BYTES] {
    let mut vals = [0u8; WIDE_COLUMN_BYTES];
    for y in 0..WIDE_HEIGHT {
        if is_dark(image.get(x, y)) {
            vals[y / 8] |= 1 << (y % 8);
        }
    }
    vals
}

/// Pack a full wide-display image into its 300 columns, left to right
pub fn image_columns(image: &PixelGrid) -> Result<Vec<[u8; WIDE_COLUMN_BYTES]>> {
    image.ensure_dims(WIDE_WIDTH, WIDE_HEIGHT)?;
    Ok((0..WIDE_WIDTH).map(|x| pack_column(image, x)).collect())
}
