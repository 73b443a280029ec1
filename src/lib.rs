//! A falling-block puzzle game.
//!
//! The engine ([`board`], [`piece`], [`game`]) is a plain state container with
//! no terminal or timer dependencies; [`app`] and [`ui`] wrap it in a ratatui
//! front-end.

pub mod app;
pub mod board;
pub mod config;
pub mod game;
pub mod input;
pub mod piece;
pub mod tile;
pub mod ui;

pub use board::Board;
pub use game::{Game, GameState, TickOutcome};
pub use input::Input;
pub use piece::{Piece, Shape};
pub use tile::{Theme, Tile};

#[cfg(test)]
mod tests;
