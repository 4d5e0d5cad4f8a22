// inputmodule/src/game/snake.rs
//! Snake state machine over a bounded grid.
//!
//! The engine is pure state: no clock, no transport. Each accepted tick
//! advances the snake one cell and yields the logical matrix to draw, or
//! the terminal game-over signal. Pacing lives in the caller (see
//! `game::runner`).

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{HEIGHT, WIDTH};
use crate::framebuffer::Grid;
use crate::game::Direction;

/// Grid coordinate. Signed so a candidate head can step off the edge
/// before wrap/bounds handling decides what happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    /// Column, 0 at the left edge
    pub x: i32,
    /// Row, 0 at the top edge
    pub y: i32,
}

impl Coord {
    /// Coordinate at (x, y)
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Copy)]
pub struct SnakeConfig {
    /// Playing field width in cells
    pub width: usize,
    /// Playing field height in cells
    pub height: usize,
    /// Crossing an edge re-enters on the opposite edge instead of ending
    /// the game
    pub wrap: bool,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            wrap: false,
        }
    }
}

/// Result of one accepted tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The matrix to draw for this tick
    Frame(Grid),
    /// Terminal: the snake hit a wall or itself. Emitted exactly once.
    GameOver {
        /// Final body length
        score: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    GameOver,
}

/// Snake engine. Created at game start, owned by the game loop, discarded
/// after the game-over signal.
#[derive(Debug)]
pub struct SnakeGame {
    config: SnakeConfig,
    head: Coord,
    /// Trailing segments, front to back
    body: VecDeque<Coord>,
    direction: Direction,
    food: Coord,
    state: State,
    signaled: bool,
    rng: StdRng,
}

impl SnakeGame {
    /// Start a new game with entropy-seeded food placement
    pub fn new(config: SnakeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a new game with a fixed seed, for reproducible runs and tests
    pub fn from_seed(config: SnakeConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SnakeConfig, mut rng: StdRng) -> Self {
        let head = Coord::new(0, 0);
        let food = Self::place_food(&mut rng, config, head, &VecDeque::new());
        Self {
            config,
            head,
            body: VecDeque::new(),
            direction: Direction::Down,
            food,
            state: State::Running,
            signaled: false,
            rng,
        }
    }

    /// Current head position
    pub fn head(&self) -> Coord {
        self.head
    }

    /// Current food position
    pub fn food(&self) -> Coord {
        self.food
    }

    /// Direction the next tick will move in
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Trailing segments, front to back
    pub fn body(&self) -> impl Iterator<Item = Coord> + '_ {
        self.body.iter().copied()
    }

    /// Body length; grows by one per food eaten
    pub fn score(&self) -> usize {
        self.body.len()
    }

    /// Whether the game has ended
    pub fn is_over(&self) -> bool {
        self.state == State::GameOver
    }

    /// Change the movement direction for the next tick. Reversing onto a
    /// non-empty body is ignored: it would collide with the first segment
    /// on the very next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.body.is_empty() && direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Advance one cell. Returns `None` once the game-over signal has
    /// already been delivered.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.state == State::GameOver {
            if self.signaled {
                return None;
            }
            self.signaled = true;
            return Some(TickOutcome::GameOver { score: self.score() });
        }

        let old_head = self.head;
        let mut candidate = old_head.step(self.direction);

        if !self.in_bounds(candidate) {
            if self.config.wrap {
                candidate = self.wrap(candidate);
            } else {
                return Some(self.finish());
            }
        }

        if self.body.contains(&candidate) {
            return Some(self.finish());
        }

        if candidate == self.food {
            // Grow: the previous head becomes the first segment
            self.body.push_front(old_head);
            self.head = candidate;
            self.food = Self::place_food(&mut self.rng, self.config, self.head, &self.body);
        } else {
            if !self.body.is_empty() {
                self.body.pop_back();
                self.body.push_front(old_head);
            }
            self.head = candidate;
        }

        Some(TickOutcome::Frame(self.render()))
    }

    fn finish(&mut self) -> TickOutcome {
        self.state = State::GameOver;
        self.signaled = true;
        TickOutcome::GameOver { score: self.score() }
    }

    fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.config.width && (c.y as usize) < self.config.height
    }

    fn wrap(&self, c: Coord) -> Coord {
        let w = self.config.width as i32;
        let h = self.config.height as i32;
        Coord::new((c.x + w) % w, (c.y + h) % h)
    }

    fn place_food(
        rng: &mut StdRng,
        config: SnakeConfig,
        head: Coord,
        body: &VecDeque<Coord>,
    ) -> Coord {
        // Rejection sampling keeps the distribution uniform over free
        // cells; the snake never fills the 306-cell grid in practice
        loop {
            let food = Coord::new(
                rng.gen_range(0..config.width as i32),
                rng.gen_range(0..config.height as i32),
            );
            if food != head && !body.contains(&food) {
                return food;
            }
        }
    }

    /// Head, food, and body cells lit; everything else off
    fn render(&self) -> Grid {
        let mut grid = Grid::new(self.config.width, self.config.height);
        grid.set(self.head.x as usize, self.head.y as usize, 1);
        grid.set(self.food.x as usize, self.food.y as usize, 1);
        for segment in &self.body {
            grid.set(segment.x as usize, segment.y as usize, 1);
        }
        grid
    }
}
