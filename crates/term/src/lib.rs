//! Terminal front end for the snake game.
//!
//! Renders into a plain framebuffer and flushes it with crossterm rather
//! than going through a widget library, so the board can use 2 columns per
//! cell and only changed cells are redrawn.
//!
//! - [`game_view`]: pure snapshot-to-framebuffer mapping
//! - [`renderer`]: raw-mode terminal output with diffing
//! - [`pacer`]: decides when the host should tick the engine

pub mod fb;
pub mod game_view;
pub mod pacer;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use pacer::{interval_nanos, TickPacer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
