//! Deterministic simulation core for grid snake, plus the terminal host that
//! plays it.
//!
//! [`game::Universe`] owns all game state. A host drives it by calling
//! [`game::Universe::tick`] on a fixed cadence, forwards input through
//! [`game::Universe::buffer_direction`] and [`game::Universe::toggle_pause`]
//! between ticks, and draws from the read-only accessors.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
