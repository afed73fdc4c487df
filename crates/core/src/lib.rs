//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule below
//! - **Portable**: Can run in any host (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: board dimensions and containment
//! - [`snake`]: head-first body with advance, growth and self-collision
//! - [`food`]: uniform food placement on free cells
//! - [`game_state`]: the engine tying it together (tick, steering, reset)
//! - [`snapshot`]: owned copy of the observable state for rendering
//!
//! # Game Rules
//!
//! - The snake starts as 3 stacked segments at the board center, heading left
//! - Each tick moves the head one cell; the body follows
//! - Leaving the board or running into the body ends the game
//! - Eating food grows the snake by one and scores a point
//! - Every 10 points the speed goes up by one tick per second
//! - Turning straight back is ignored
//! - If no free cell is left for food, the game is won
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.status(), GameStatus::Running);
//!
//! game.set_direction(Direction::Up);
//! game.tick();
//!
//! assert_eq!(game.snake().head().y, 9);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Hosts call [`GameState::tick`](game_state::GameState::tick)
//! once every [`GameState::tick_interval`](game_state::GameState::tick_interval),
//! re-reading the interval after each tick because the speed can change.

pub mod board;
pub mod food;
pub mod game_state;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use food::{place_food, Occupancy};
pub use game_state::GameState;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
