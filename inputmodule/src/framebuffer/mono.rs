// inputmodule/src/framebuffer/mono.rs
//! Monochrome encoders for the 9x34 LED matrix.
//!
//! Full-frame packing puts cell (x, y) at bit index `x + 9*y`: bit `i % 8`
//! of byte `i / 8`, 306 bits in 39 bytes. The per-column streamed variant
//! reuses the greyscale staging path with saturated values so the module
//! can swap the frame in atomically on commit.

use crate::constants::{FRAME_BYTES, HEIGHT, LED_COUNT, WIDTH};
use crate::framebuffer::{is_bright, Grid, PixelGrid};
use crate::{Error, Result};

/// Pack a logical grid into the 39-byte full-frame draw payload
pub fn pack_grid(grid: &Grid) -> Result<[u8; FRAME_BYTES]> {
    grid.ensure_dims(WIDTH, HEIGHT)?;

    let mut vals = [0u8; FRAME_BYTES];
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if grid.is_lit(x, y) {
                let i = x + WIDTH * y;
                vals[i / 8] |= 1 << (i % 8);
            }
        }
    }
    Ok(vals)
}

/// Inverse of [`pack_grid`]: expand a packed frame back into a grid with
/// lit cells set to 1
pub fn unpack_frame(vals: &[u8; FRAME_BYTES]) -> Grid {
    let mut grid = Grid::new(WIDTH, HEIGHT);
    for i in 0..LED_COUNT {
        if vals[i / 8] & (1 << (i % 8)) != 0 {
            grid.set(i % WIDTH, i / WIDTH, 1);
        }
    }
    grid
}

/// Threshold an RGB image into the full-frame draw payload. Pixels whose
/// average brightness is above the midpoint are lit.
pub fn pack_image(image: &PixelGrid) -> Result<[u8; FRAME_BYTES]> {
    image.ensure_dims(WIDTH, HEIGHT)?;

    let mut vals = [0u8; FRAME_BYTES];
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if is_bright(image.get(x, y)) {
                let i = x + WIDTH * y;
                vals[i / 8] |= 1 << (i % 8);
            }
        }
    }
    Ok(vals)
}

/// Threshold an RGB image into nine monochrome columns for the streamed
/// stage-and-commit path. Lit cells become full intensity so the staged
/// columns render like a full-frame draw.
pub fn image_columns(image: &PixelGrid) -> Result<[[u8; HEIGHT]; WIDTH]> {
    image.ensure_dims(WIDTH, HEIGHT)?;

    let mut cols = [[0u8; HEIGHT]; WIDTH];
    for (x, col) in cols.iter_mut().enumerate() {
        for (y, cell) in col.iter_mut().enumerate() {
            if is_bright(image.get(x, y)) {
                *cell = 0xFF;
            }
        }
    }
    Ok(cols)
}

/// Payload lighting the first `count` LEDs, in packing order. Used for
/// percentage-style fills.
pub fn lit_led_count(count: usize) -> Result<[u8; FRAME_BYTES]> {
    if count > LED_COUNT {
        return Err(Error::InvalidArgument(format!(
            "LED count must be 0-{}, got {}",
            LED_COUNT, count
        )));
    }

    let mut vals = [0u8; FRAME_BYTES];
    for byte in vals.iter_mut().take(count / 8) {
        *byte = 0xFF;
    }
    for bit in 0..count % 8 {
        vals[count / 8] |= 1 << bit;
    }
    Ok(vals)
}
