use thiserror::Error;

use crate::coord::Coord;

/// Malformed input handed to the validation engine.
///
/// An illegal move is never an error, rules answer those with `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("({x}, {y}) is outside of the board, both values must be from 0 to 7")]
    OutOfBounds { x: i64, y: i64 },
    #[error("`{0}` is not a known piece type")]
    UnknownPieceType(String),
    #[error("{0} was given as both origin and destination")]
    DegenerateMove(Coord),
    #[error("there is no piece on {0}")]
    EmptySquare(Coord),
}
