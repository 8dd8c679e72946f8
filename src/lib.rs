//! Classic grid snake.
//!
//! The gameplay core lives in [`game`], [`snake`] and [`food`] and has no
//! terminal dependencies. Everything else is the glue used by the
//! `grid-snake` binary to drive it from a terminal.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
