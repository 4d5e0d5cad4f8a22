// inputmodule/src/framebuffer/mod.rs
//! Pure encoders that turn logical pixel data into protocol payloads.
//!
//! Nothing in this module touches a transport; every function either
//! produces the exact bytes a command carries or rejects the input with a
//! dimension error before any byte is produced.

pub mod eq;
pub mod grey;
pub mod mono;
pub mod text;
pub mod wide;

use crate::types::Rgb;
use crate::{Error, Result};

/// Logical cell matrix. Cells are intensities: 0 is off, anything else is
/// on for the monochrome encoders and the raw value for greyscale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// All-off grid of the given geometry
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Intensity at (x, y)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[x + y * self.width]
    }

    /// Set the intensity at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[x + y * self.width] = value;
    }

    /// Whether the cell at (x, y) is on
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != 0
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    pub(crate) fn ensure_dims(&self, width: usize, height: usize) -> Result<()> {
        if self.width != width || self.height != height {
            return Err(Error::DimensionMismatch {
                expected_width: width,
                expected_height: height,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Decoded RGB pixel matrix, as handed over by an image-loading
/// collaborator. Row-major, top-left origin.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build from row-major pixels; the pixel count must match the geometry
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(Error::InvalidArgument(format!(
                "pixel count {} does not match {}x{}",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Uniformly colored grid, mostly useful in tests
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[x + y * self.width]
    }

    /// Set the pixel at (x, y)
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.pixels[x + y * self.width] = color;
    }

    pub(crate) fn ensure_dims(&self, width: usize, height: usize) -> Result<()> {
        if self.width != width || self.height != height {
            return Err(Error::DimensionMismatch {
                expected_width: width,
                expected_height: height,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Average RGB brightness on the 0-255 scale
pub(crate) fn average_brightness(pixel: Rgb) -> f32 {
    (pixel.r as f32 + pixel.g as f32 + pixel.b as f32) / 3.0
}

/// Whether a pixel counts as lit for the small display (above midpoint)
pub(crate) fn is_bright(pixel: Rgb) -> bool {
    average_brightness(pixel) > 255.0 / 2.0
}
