// inputmodule/src/game/runner.rs
//! Ticker-driven loop for the local snake simulation.
//!
//! One loop iteration: poll the stop token, gate on the tick cadence, pull
//! the latest direction from the shared cell, advance the engine, and push
//! the rendered frame through the encoder and codec. The input side runs
//! elsewhere and only ever touches the shared cell.

use std::time::Duration;

use log::{debug, info};

use crate::framebuffer::mono;
use crate::game::snake::{SnakeConfig, SnakeGame, TickOutcome};
use crate::game::SharedDirection;
use crate::protocol::{codec, Command};
use crate::transport::Transport;
use crate::utils::{StopToken, Ticker};
use crate::Result;

/// Wall-clock cadence of the simulation
pub const TICK_PERIOD: Duration = Duration::from_millis(200);

/// Run a snake game to completion, drawing every frame to the module.
/// Returns the final score when the game ends or the stop token fires.
/// Transport errors end the loop immediately.
pub fn run_snake(
    transport: &dyn Transport,
    controls: &SharedDirection,
    stop: &StopToken,
    config: SnakeConfig,
) -> Result<usize> {
    run_snake_game(transport, controls, stop, SnakeGame::new(config))
}

pub(crate) fn run_snake_game(
    transport: &dyn Transport,
    controls: &SharedDirection,
    stop: &StopToken,
    mut game: SnakeGame,
) -> Result<usize> {
    let mut ticker = Ticker::new(TICK_PERIOD);

    loop {
        if stop.is_stopped() {
            debug!("snake loop cancelled at score {}", game.score());
            return Ok(game.score());
        }
        if !ticker.due() {
            std::thread::sleep(Duration::from_millis(5));
            continue;
        }

        game.set_direction(controls.get());
        match game.tick() {
            Some(TickOutcome::Frame(grid)) => {
                let vals = mono::pack_grid(&grid)?;
                codec::send(transport, &Command::Draw(vals))?;
            }
            Some(TickOutcome::GameOver { score }) => {
                info!("game over, score {}", score);
                return Ok(score);
            }
            None => return Ok(game.score()),
        }
    }
}
