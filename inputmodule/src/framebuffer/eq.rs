// inputmodule/src/framebuffer/eq.rs
//! Equalizer bar layout: one bar per column, growing from the middle row
//! outwards. Odd values put the extra cell below the midline.

use crate::constants::{HEIGHT, WIDTH};
use crate::framebuffer::Grid;
use crate::{Error, Result};

/// Lay out up to nine bar heights (0-34 cells each) into a matrix grid
pub fn bars(values: &[u8]) -> Result<Grid> {
    if values.len() > WIDTH {
        return Err(Error::InvalidArgument(format!(
            "at most {} equalizer bars, got {}",
            WIDTH,
            values.len()
        )));
    }
    if let Some(&v) = values.iter().find(|&&v| v as usize > HEIGHT) {
        return Err(Error::InvalidArgument(format!(
            "bar height must be 0-{}, got {}",
            HEIGHT, v
        )));
    }

    let mut grid = Grid::new(WIDTH, HEIGHT);
    let mid = HEIGHT / 2;
    for (col, &value) in values.iter().enumerate() {
        let above = value as usize / 2;
        let below = value as usize - above;
        for i in 0..above {
            grid.set(col, mid + i, 0xFF);
        }
        for i in 0..below {
            grid.set(col, mid - 1 - i, 0xFF);
        }
    }
    Ok(grid)
}
