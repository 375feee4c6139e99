use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
};

use tracing::debug;

use crate::{
    color::Color,
    coord::Coord,
    piece::{ColoredPieceKind, PieceKind},
};

/// Read-only occupancy queries, the only thing move rules may see of a board.
pub trait BoardView {
    fn occupant_at(&self, position: Coord) -> Option<ColoredPieceKind>;

    /// The most recently applied move, if the view remembers one.
    fn last_move(&self) -> Option<LastMove> {
        None
    }
    fn is_occupied(&self, position: Coord) -> bool {
        self.occupant_at(position).is_some()
    }
}
impl<T> BoardView for &T
where
    T: BoardView + ?Sized,
{
    fn occupant_at(&self, position: Coord) -> Option<ColoredPieceKind> {
        (**self).occupant_at(position)
    }
    fn last_move(&self) -> Option<LastMove> {
        (**self).last_move()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub piece: ColoredPieceKind,
    pub origin: Coord,
    pub destination: Coord,
}
impl LastMove {
    pub fn is_pawn_double_push(self) -> bool {
        self.piece.piece() == PieceKind::Pawn
            && self.origin.x() == self.destination.x()
            && (self.destination - self.origin).y == 2 * self.piece.direction()
    }
}
impl Display for LastMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.piece, self.origin, self.destination)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    board: [[Option<ColoredPieceKind>; 8]; 8],
    last_move: Option<LastMove>,
}
impl Board {
    pub fn empty() -> Self {
        Board::default()
    }
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (x, piece) in (0..).zip(PieceKind::STARTING_CONFIGURATION) {
                board.place(
                    Coord::new(x, color.home_rank()),
                    ColoredPieceKind::new(color, piece),
                );
                board.place(
                    Coord::new(x, color.pawn_home_rank()),
                    ColoredPieceKind::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }
    pub fn rows(&self) -> &[[Option<ColoredPieceKind>; 8]; 8] {
        &self.board
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, ColoredPieceKind)> + '_ {
        Coord::all().filter_map(|position| self[position].map(|piece| (position, piece)))
    }
    /// Puts `piece` on `position` and returns what was there before.
    ///
    /// Editing the board forgets the last move, so en passant is not
    /// available right after setup.
    pub fn place(&mut self, position: Coord, piece: ColoredPieceKind) -> Option<ColoredPieceKind> {
        self.last_move = None;
        self.cell_mut(position).replace(piece)
    }
    /// Empties `position`. Forgets the last move like [`Board::place`].
    pub fn remove(&mut self, position: Coord) -> Option<ColoredPieceKind> {
        self.last_move = None;
        self.cell_mut(position).take()
    }
    /// The square whose occupant a move from `origin` to `destination` would
    /// capture. This is the passed square for a diagonal pawn step onto an
    /// empty square, `destination` otherwise.
    pub fn capture_square(&self, origin: Coord, destination: Coord) -> Coord {
        let en_passant = self[destination].is_none()
            && origin.x() != destination.x()
            && self[origin].is_some_and(|piece| piece.piece() == PieceKind::Pawn);
        if en_passant {
            Coord::new(destination.x(), origin.y())
        } else {
            destination
        }
    }
    /// Applies a move that a rule already accepted and returns the captured
    /// piece, taken from [`Board::capture_square`].
    ///
    /// Nothing happens when `origin` is empty.
    pub fn move_piece(&mut self, origin: Coord, destination: Coord) -> Option<ColoredPieceKind> {
        let target = self.capture_square(origin, destination);
        let piece = self.cell_mut(origin).take()?;
        let captured = self.cell_mut(target).take();
        if target != destination {
            if let Some(captured) = captured {
                debug!(%captured, passed = %target, "captured en passant");
            }
        }
        *self.cell_mut(destination) = Some(piece);
        self.last_move = Some(LastMove {
            piece,
            origin,
            destination,
        });
        captured
    }
    pub fn set_last_move(&mut self, last_move: Option<LastMove>) {
        self.last_move = last_move;
    }
    fn cell_mut(&mut self, position: Coord) -> &mut Option<ColoredPieceKind> {
        &mut self.board[position.y() as usize][position.x() as usize]
    }
}
impl Index<Coord> for Board {
    type Output = Option<ColoredPieceKind>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.board[index.y() as usize][index.x() as usize]
    }
}
impl BoardView for Board {
    fn occupant_at(&self, position: Coord) -> Option<ColoredPieceKind> {
        self[position]
    }
    fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }
}
