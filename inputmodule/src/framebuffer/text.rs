// inputmodule/src/framebuffer/text.rs
//! Layout of 5x6 glyphs on the LED matrix.
//!
//! Glyph bitmaps themselves are caller-supplied data (font tables live
//! outside this crate); this module only places them. Five glyphs fit
//! vertically: each occupies a 5x6 box at x offset 2 with a one-row gap,
//! so consecutive glyphs start 7 rows apart.

use crate::constants::{HEIGHT, WIDTH};
use crate::framebuffer::Grid;
use crate::{Error, Result};

/// Glyph box width in pixels
pub const GLYPH_WIDTH: usize = 5;

/// Glyph box height in pixels
pub const GLYPH_HEIGHT: usize = 6;

/// Vertical stride between stacked glyphs
const GLYPH_STRIDE: usize = 7;

/// Horizontal offset centering the 5-pixel box on the 9-column matrix
const GLYPH_X_OFFSET: usize = 2;

/// Most glyphs that fit on the matrix at once
pub const MAX_GLYPHS: usize = 5;

/// A 5x6 monochrome glyph, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(pub [u8; GLYPH_WIDTH * GLYPH_HEIGHT]);

impl Glyph {
    /// All-off glyph, useful as a spacer
    pub const BLANK: Self = Self([0; GLYPH_WIDTH * GLYPH_HEIGHT]);

    fn pixel(&self, x: usize, y: usize) -> bool {
        self.0[x + y * GLYPH_WIDTH] != 0
    }
}

/// Compose up to five glyphs, stacked top to bottom, into a full matrix
/// grid. More than five do not fit and are rejected.
pub fn compose(glyphs: &[Glyph]) -> Result<Grid> {
    if glyphs.len() > MAX_GLYPHS {
        return Err(Error::InvalidArgument(format!(
            "at most {} glyphs fit on the matrix, got {}",
            MAX_GLYPHS,
            glyphs.len()
        )));
    }

    let mut grid = Grid::new(WIDTH, HEIGHT);
    for (slot, glyph) in glyphs.iter().enumerate() {
        let y_offset = slot * GLYPH_STRIDE;
        for gy in 0..GLYPH_HEIGHT {
            for gx in 0..GLYPH_WIDTH {
                if glyph.pixel(gx, gy) {
                    grid.set(GLYPH_X_OFFSET + gx, y_offset + gy, 1);
                }
            }
        }
    }
    Ok(grid)
}
