#![cfg(feature = "serial")]

//! Local snake simulation rendered on the LED matrix.
//!
//! Steering reads lines from stdin: w/a/s/d turn, q quits.
//!
//! Usage:
//!   cargo run -p inputmodule --example snake_demo --features serial -- /dev/ttyACM0

use std::io::BufRead;

use anyhow::Result;
use inputmodule::game::snake::SnakeConfig;
use inputmodule::game::{dispatch, run_snake, Action, Direction, GameMode, InputEvent, SharedDirection};
use inputmodule::transport::serial::SerialTransport;
use inputmodule::utils::StopToken;

fn event_for(line: &str) -> Option<InputEvent> {
    match line.trim() {
        "w" => Some(InputEvent::Direction(Direction::Up)),
        "s" => Some(InputEvent::Direction(Direction::Down)),
        "a" => Some(InputEvent::Direction(Direction::Left)),
        "d" => Some(InputEvent::Direction(Direction::Right)),
        "q" => Some(InputEvent::Quit),
        _ => None,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyACM0".to_string());
    let transport = SerialTransport::new(&path);

    let controls = SharedDirection::new(Direction::Down);
    let stop = StopToken::new();

    let steering = controls.clone();
    let canceller = stop.clone();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match event_for(&line).and_then(|e| dispatch(GameMode::Local, e)) {
                Some(Action::Steer(d)) => steering.set(d),
                Some(Action::Quit) => {
                    canceller.stop();
                    break;
                }
                _ => {}
            }
        }
    });

    println!("Playing snake on {} (w/a/s/d to steer, q to quit)", path);
    let score = run_snake(&transport, &controls, &stop, SnakeConfig::default())?;
    println!("Final score: {}", score);
    Ok(())
}
