//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and recognizes the
//! quit chord. Whether an action is allowed right now (e.g. restart only after
//! the game ends) is decided by the engine, not here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
