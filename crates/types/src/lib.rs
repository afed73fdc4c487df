//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Start cell**: the board center, (15, 10) on the default board
//!
//! # Pace
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED` | 3 | Ticks per second after a reset |
//! | `SPEED_UP_EVERY` | 10 | Food eaten per speed increment |
//! | `NANOS_PER_SECOND` | 1e9 | Tick interval is `NANOS_PER_SECOND / speed` |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameStatus, Point, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Directions know their opposite and their unit vector
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Point::new(5, 5).step(Direction::Up), Point::new(5, 4));
//!
//! // Only a reset leaves a terminal status
//! assert!(GameStatus::GameOver.is_terminal());
//! assert!(!GameStatus::Running.is_terminal());
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 30);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (30 columns)
pub const BOARD_WIDTH: i32 = 30;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Smallest board edge the host accepts from configuration.
pub const MIN_BOARD_EDGE: i32 = 4;

/// Largest board edge the host accepts from configuration.
pub const MAX_BOARD_EDGE: i32 = 256;

/// Segments in a freshly reset snake. All of them start on the same cell.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Speed after a reset, in ticks per second.
pub const INITIAL_SPEED: u32 = 3;

/// Every this many points the speed goes up by one.
pub const SPEED_UP_EVERY: u32 = 10;

/// Direction the snake faces after a reset.
pub const INITIAL_DIRECTION: Direction = Direction::Left;

/// Rejection-sampling attempts before food placement scans for free cells.
pub const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

/// Nanoseconds in one second; the tick interval is this divided by speed.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;


/// A cell coordinate on the board.
///
/// `x` grows to the right and `y` grows downward. Coordinates are signed so a
/// head that has just left the board (e.g. `x == -1`) is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Movement direction of the snake head
///
/// - **Up**: y - 1
/// - **Down**: y + 1
/// - **Left**: x - 1
/// - **Right**: x + 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact reverse of this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Check if `other` is the exact reverse of this direction.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Lifecycle of one game.
///
/// `Running` is the only non-terminal state. `GameOver` follows a wall or self
/// collision; `Won` follows eating food when no free cell is left for the next
/// one. Only a reset leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
    Won,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Game actions that can be applied to modify game state
///
/// Produced by the key map and consumed by `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer the snake for the next tick
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Start a new game (honored only once the current one has ended)
    Restart,
}
