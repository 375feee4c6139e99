//! Differential test against the `chess` crate's move tables.
//!
//! Boards are random piece soups with no move history, so en passant never
//! applies. Captures are not filtered by color on either side.
use chess::{BitBoard, File, Rank, Square};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    board_display::BoardDisplay,
    color::Color,
    coord::Coord,
    fen::Placement,
    piece::{ColoredPieceKind, PieceKind},
    registry::Registry,
};

impl From<Coord> for Square {
    fn from(value: Coord) -> Self {
        Square::make_square(
            Rank::from_index(7 - usize::from(value.y())),
            File::from_index(usize::from(value.x())),
        )
    }
}
impl From<Square> for Coord {
    fn from(value: Square) -> Self {
        Coord::new(
            value.get_file().to_index().try_into().unwrap(),
            (7 - value.get_rank().to_index()).try_into().unwrap(),
        )
    }
}
impl From<Color> for chess::Color {
    fn from(value: Color) -> Self {
        match value {
            Color::White => chess::Color::White,
            Color::Black => chess::Color::Black,
        }
    }
}
fn occupancy(board: &Board) -> BitBoard {
    board
        .pieces()
        .fold(chess::EMPTY, |occupancy, (position, _)| {
            occupancy | BitBoard::from_square(position.into())
        })
}
fn expected(piece: ColoredPieceKind, origin: Coord, board: &Board) -> FxHashSet<Coord> {
    let square: Square = origin.into();
    let blockers = occupancy(board);
    let color = piece.color().into();
    let moves = match piece.piece() {
        PieceKind::Pawn => {
            chess::get_pawn_quiets(square, color, blockers)
                | chess::get_pawn_attacks(square, color, blockers)
        }
        PieceKind::Knight => chess::get_knight_moves(square),
        PieceKind::Bishop => chess::get_bishop_moves(square, blockers),
        PieceKind::Rook => chess::get_rook_moves(square, blockers),
        PieceKind::Queen => {
            chess::get_bishop_moves(square, blockers) | chess::get_rook_moves(square, blockers)
        }
        PieceKind::King => chess::get_king_moves(square),
    };
    moves.map(Coord::from).collect()
}
fn random_board(rng: &mut impl Rng) -> Board {
    let mut board = Board::empty();
    for _ in 0..rng.random_range(1..=24) {
        let piece = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        let color = if rng.random_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        // pawns never stand on either back rank
        let y = match piece {
            PieceKind::Pawn => rng.random_range(1..=6),
            _ => rng.random_range(0..8),
        };
        let position = Coord::new(rng.random_range(0..8), y);
        board.place(position, ColoredPieceKind::new(color, piece));
    }
    board
}
#[test]
fn rules_agree_with_the_chess_crate() {
    let registry = Registry::standard();
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..2000 {
        let board = random_board(&mut rng);
        for (origin, piece) in board.pieces() {
            let found: FxHashSet<_> = registry.destinations(origin, &board).collect();
            let expected = expected(piece, origin, &board);
            if let Some(destination) = found.difference(&expected).next() {
                panic!(
                    "{piece} {origin}{destination} was accepted but it's not a legal move\n{}\n{}",
                    BoardDisplay::new(&board),
                    Placement(board),
                );
            }
            if let Some(destination) = expected.difference(&found).next() {
                panic!(
                    "{piece} {origin}{destination} not found\n{}\n{}",
                    BoardDisplay::new(&board),
                    Placement(board),
                );
            }
        }
    }
}
