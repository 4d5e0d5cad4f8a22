use std::time::Duration;

use inputmodule::game::snake::SnakeConfig;
use inputmodule::game::{run_snake, Direction, SharedDirection};
use inputmodule::transport::MockTransport;
use inputmodule::utils::StopToken;

#[test]
fn loop_draws_frames_until_stopped() {
    let mock = MockTransport::new();
    let controls = SharedDirection::new(Direction::Down);
    let stop = StopToken::new();

    let canceller = stop.clone();
    let handle = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(500));
        canceller.stop();
    });

    let score = run_snake(&mock, &controls, &stop, SnakeConfig::default()).unwrap();
    handle.join().unwrap();

    // At the 200 ms cadence the half-second window fits one or two ticks
    let sent = mock.sent();
    assert!(!sent.is_empty());
    assert!(sent.len() <= 3);
    for frame in &sent {
        assert_eq!(&frame[..3], &[0x32, 0xAC, 0x06]);
        assert_eq!(frame.len(), 3 + 39);
    }
    // Entropy-seeded food might sit right in the snake's path
    assert!(score <= sent.len());
}

#[test]
fn pre_stopped_token_sends_nothing() {
    let mock = MockTransport::new();
    let controls = SharedDirection::new(Direction::Down);
    let stop = StopToken::new();
    stop.stop();

    let score = run_snake(&mock, &controls, &stop, SnakeConfig::default()).unwrap();
    assert_eq!(score, 0);
    assert!(mock.sent().is_empty());
}
