// inputmodule/src/game/mod.rs
//! Local game simulation: the snake engine, input dispatch, and the
//! ticker-driven loop that renders through the framebuffer encoders.

pub mod input;
pub mod runner;
pub mod snake;

pub use input::{dispatch, Action, GameMode, InputEvent};
pub use runner::run_snake;
pub use snake::{SnakeConfig, SnakeGame, TickOutcome};

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Movement direction on the grid
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// The 180-degree reversal of this direction
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            _ => Self::Right,
        }
    }
}

/// Latest-value-wins direction cell shared between the input task and the
/// game ticker. The input task may overwrite it at any time; the ticker
/// reads it once per tick. Intermediate values are deliberately lost.
#[derive(Debug, Clone)]
pub struct SharedDirection {
    inner: Arc<AtomicU8>,
}

impl SharedDirection {
    /// Cell starting at the given direction
    pub fn new(initial: Direction) -> Self {
        Self {
            inner: Arc::new(AtomicU8::new(initial as u8)),
        }
    }

    /// Overwrite the cell
    pub fn set(&self, direction: Direction) {
        self.inner.store(direction as u8, Ordering::Relaxed);
    }

    /// Read the latest direction
    pub fn get(&self) -> Direction {
        Direction::from_u8(self.inner.load(Ordering::Relaxed))
    }
}
