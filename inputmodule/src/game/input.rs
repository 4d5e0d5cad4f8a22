// inputmodule/src/game/input.rs
//! Maps abstract input events onto game actions.
//!
//! Key capture is an external collaborator; this module only decides what
//! an event means. In local mode a direction event steers the simulation;
//! in embedded mode every event becomes a single GameControl command byte
//! for the module firmware.

use crate::game::Direction;
use crate::types::GameControl;

/// Abstract input event from whatever captures the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A direction key was pressed
    Direction(Direction),
    /// The quit key was pressed
    Quit,
    /// Second-paddle controls for the embedded pong game
    SecondPaddleLeft,
    SecondPaddleRight,
}

/// Where the game actually runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Simulated locally, frames rendered over the draw command
    Local,
    /// Running on the module firmware, driven by GameControl commands
    Embedded,
}

/// What the caller should do with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Feed the local engine's shared direction cell
    Steer(Direction),
    /// Send this control value to the module
    Control(GameControl),
    /// Stop the local loop
    Quit,
}

/// Resolve an event under the given mode. Events with no meaning in the
/// mode (paddle extras while simulating locally) yield nothing.
pub fn dispatch(mode: GameMode, event: InputEvent) -> Option<Action> {
    match (mode, event) {
        (GameMode::Local, InputEvent::Direction(d)) => Some(Action::Steer(d)),
        (GameMode::Local, InputEvent::Quit) => Some(Action::Quit),
        (GameMode::Local, _) => None,
        (GameMode::Embedded, InputEvent::Direction(d)) => Some(Action::Control(match d {
            Direction::Up => GameControl::Up,
            Direction::Down => GameControl::Down,
            Direction::Left => GameControl::Left,
            Direction::Right => GameControl::Right,
        })),
        (GameMode::Embedded, InputEvent::Quit) => Some(Action::Control(GameControl::Quit)),
        (GameMode::Embedded, InputEvent::SecondPaddleLeft) => {
            Some(Action::Control(GameControl::SecondLeft))
        }
        (GameMode::Embedded, InputEvent::SecondPaddleRight) => {
            Some(Action::Control(GameControl::SecondRight))
        }
    }
}
