use inputmodule::game::snake::{Coord, SnakeConfig, SnakeGame, TickOutcome};
use inputmodule::game::Direction;

#[test]
fn straight_run_hits_the_bottom_wall_with_zero_score() {
    // Food stays put until eaten, so run straight down a column the food
    // does not occupy: nothing is ever eaten and the score stays zero.
    // Thirty-three down-steps reach the bottom row; the next step would
    // leave the grid and ends the game.
    let mut game = SnakeGame::from_seed(SnakeConfig::default(), 7);
    let col = if game.food().x == 0 { 1 } else { 0 };

    let mut frames = 0;
    if col == 1 {
        // Sidestep out of the food's column first
        game.set_direction(Direction::Right);
        assert!(matches!(game.tick(), Some(TickOutcome::Frame(_))));
        frames += 1;
        game.set_direction(Direction::Down);
    }
    loop {
        match game.tick() {
            Some(TickOutcome::Frame(_)) => {
                frames += 1;
                assert_eq!(game.head().x, col);
                assert_eq!(game.score(), 0);
            }
            Some(TickOutcome::GameOver { score }) => {
                assert_eq!(score, 0);
                break;
            }
            None => panic!("terminal signal before game over"),
        }
    }
    assert_eq!(frames, 33 + col);
    assert!(game.is_over());
    assert_eq!(game.tick(), None);
}

#[test]
fn wrapping_run_never_hits_a_wall() {
    let mut game = SnakeGame::from_seed(
        SnakeConfig {
            wrap: true,
            ..SnakeConfig::default()
        },
        7,
    );
    // Two full vertical laps
    for i in 0..68 {
        match game.tick() {
            Some(TickOutcome::Frame(_)) => {}
            other => panic!("tick {}: expected frame, got {:?}", i, other),
        }
    }
    assert!(!game.is_over());
    assert_eq!(game.head().x, 0);
}

#[test]
fn score_counts_body_segments() {
    let mut game = SnakeGame::from_seed(SnakeConfig::default(), 42);
    let mut frames = 0;
    while let Some(TickOutcome::Frame(_)) = game.tick() {
        assert_eq!(game.score(), game.body().count());
        frames += 1;
        assert!(frames <= 34);
    }
}

#[test]
fn frame_lights_head_food_and_body() {
    let mut game = SnakeGame::from_seed(SnakeConfig::default(), 3);
    if let Some(TickOutcome::Frame(grid)) = game.tick() {
        let head = game.head();
        let food = game.food();
        assert!(grid.is_lit(head.x as usize, head.y as usize));
        assert!(grid.is_lit(food.x as usize, food.y as usize));
        let expected = 1 + 1 + game.score();
        assert_eq!(grid.lit_count(), expected);
    } else {
        panic!("expected frame");
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let mut a = SnakeGame::from_seed(SnakeConfig::default(), 99);
    let mut b = SnakeGame::from_seed(SnakeConfig::default(), 99);
    assert_eq!(a.food(), b.food());
    for _ in 0..10 {
        assert_eq!(a.tick(), b.tick());
    }
}

#[test]
fn direction_changes_take_effect_next_tick() {
    let mut game = SnakeGame::from_seed(SnakeConfig::default(), 7);
    game.tick().unwrap();
    game.set_direction(Direction::Right);
    game.tick().unwrap();
    assert_eq!(game.head(), Coord::new(1, 1));
}
