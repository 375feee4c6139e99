//! Move validation for chess pieces.
//!
//! Each piece kind has a [`MoveRule`](rules::MoveRule) that answers whether a
//! move is geometrically legal on a given board. Check, checkmate, castling and
//! promotion are left to the caller. [`Game`](game::Game) is a small caller
//! that applies accepted moves, and [`repl`] drives one from the terminal.
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod board_display;
pub mod color;
pub mod config;
pub mod coord;
pub mod error;
pub mod fen;
pub mod game;
pub mod piece;
pub mod registry;
pub mod repl;
pub mod rules;

#[cfg(test)]
mod fuzz;

pub use crate::{
    board::{Board, BoardView},
    config::RuleConfig,
    error::ValidationError,
    registry::{Registry, validate_move},
};
