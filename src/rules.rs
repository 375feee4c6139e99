//! Per-piece movement rules.
//!
//! Every rule answers one question: may `piece` go from `origin` to
//! `destination` on this board? Rules only read the board through
//! [`BoardView`] and never decide whose turn it is or whether the destination
//! holds a friendly piece, that is up to the caller.

use std::fmt::{self, Display, Formatter};

use crate::{board::BoardView, coord::Coord, coord::Vector, piece::ColoredPieceKind};

pub use self::{
    leaper::{KingRule, KnightRule},
    pawn::PawnRule,
    slider::{BishopRule, QueenRule, RookRule},
};

mod leaper;
mod pawn;
mod slider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub piece: ColoredPieceKind,
    pub origin: Coord,
    pub destination: Coord,
}
impl MoveRequest {
    pub fn movement(self) -> Vector {
        self.destination - self.origin
    }
    pub fn is_degenerate(self) -> bool {
        self.origin == self.destination
    }
}
impl Display for MoveRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.piece, self.origin, self.destination)?;
        Ok(())
    }
}

pub trait MoveRule {
    /// Returns `false` for any move the piece cannot make, including a
    /// degenerate one.
    fn validate(&self, request: MoveRequest, board: &dyn BoardView) -> bool;
}

#[cfg(test)]
pub(crate) mod fixture {
    use crate::{
        board::Board,
        color::Color,
        coord::Coord,
        fen::Placement,
        piece::{ColoredPieceKind, PieceKind},
        rules::MoveRequest,
    };

    pub fn setup(placement: &str) -> Board {
        placement.parse::<Placement>().unwrap().0
    }
    pub fn request(
        color: Color,
        kind: PieceKind,
        origin: (u8, u8),
        destination: (u8, u8),
    ) -> MoveRequest {
        MoveRequest {
            piece: ColoredPieceKind::new(color, kind),
            origin: Coord::new(origin.0, origin.1),
            destination: Coord::new(destination.0, destination.1),
        }
    }
    /// An empty board with a black pawn on each listed square.
    pub fn with_blockers(squares: &[(u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(x, y) in squares {
            board.place(
                Coord::new(x, y),
                ColoredPieceKind::new(Color::Black, PieceKind::Pawn),
            );
        }
        board
    }
}
