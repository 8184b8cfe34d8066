//! Gess rules engine.
//!
//! Gess is a two-player abstract game on a 20x20 grid where a "piece" is
//! the full 3x3 neighborhood around a chosen center, moved as a unit. A
//! player loses when their last ring (eight same-color stones around an
//! empty center) is destroyed. This crate implements board state, the
//! move-validation chain, ring detection, and terminal-state tracking;
//! display and input handling beyond coordinate tokens are caller concerns.

pub mod board;
pub mod engine;
pub mod error;
pub mod notation;
pub mod rules;

pub use board::{Board, Cell, Color, Coord};
pub use engine::{GameEngine, GameState};
pub use error::MoveError;
