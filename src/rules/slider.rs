use tracing::trace;

use crate::{
    board::BoardView,
    coord::Coord,
    rules::{MoveRequest, MoveRule},
};

/// Walks `path` in order and stops at the first occupied square.
fn is_clear(board: &dyn BoardView, mut path: impl Iterator<Item = Coord>) -> bool {
    match path.find(|position| board.is_occupied(*position)) {
        Some(blocker) => {
            trace!(%blocker, "path is blocked");
            false
        }
        None => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RookRule;

impl MoveRule for RookRule {
    fn validate(&self, request: MoveRequest, board: &dyn BoardView) -> bool {
        request
            .origin
            .is_aligned_with_rook(request.destination)
            .is_some_and(|path| is_clear(board, path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BishopRule;

impl MoveRule for BishopRule {
    fn validate(&self, request: MoveRequest, board: &dyn BoardView) -> bool {
        request
            .origin
            .is_aligned_with_bishop(request.destination)
            .is_some_and(|path| is_clear(board, path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QueenRule {
    rook: RookRule,
    bishop: BishopRule,
}

impl MoveRule for QueenRule {
    fn validate(&self, request: MoveRequest, board: &dyn BoardView) -> bool {
        self.rook.validate(request, board) || self.bishop.validate(request, board)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        piece::PieceKind,
        rules::{
            MoveRule,
            fixture::{request, setup, with_blockers},
            slider::{BishopRule, QueenRule, RookRule},
        },
    };

    #[test]
    fn rook_slides_along_an_empty_file() {
        let movement = request(Color::White, PieceKind::Rook, (0, 0), (0, 7));
        assert!(RookRule.validate(movement, &Board::empty()));
        for y in 1..=6 {
            assert!(!RookRule.validate(movement, &with_blockers(&[(0, y)])));
        }
    }
    #[test]
    fn rook_ignores_the_destination_and_squares_beyond() {
        let board = with_blockers(&[(0, 4), (0, 5)]);
        let movement = request(Color::White, PieceKind::Rook, (0, 0), (0, 4));
        assert!(RookRule.validate(movement, &board));
    }
    #[test]
    fn rook_slides_along_a_rank_both_ways() {
        let board = Board::empty();
        assert!(RookRule.validate(
            request(Color::Black, PieceKind::Rook, (7, 3), (0, 3)),
            &board
        ));
        assert!(RookRule.validate(
            request(Color::Black, PieceKind::Rook, (2, 3), (5, 3)),
            &board
        ));
    }
    #[test]
    fn rook_rejects_other_directions() {
        let board = Board::empty();
        assert!(!RookRule.validate(
            request(Color::White, PieceKind::Rook, (0, 0), (1, 1)),
            &board
        ));
        assert!(!RookRule.validate(
            request(Color::White, PieceKind::Rook, (0, 0), (0, 0)),
            &board
        ));
    }
    #[test]
    fn bishop_slides_along_an_empty_diagonal() {
        let movement = request(Color::White, PieceKind::Bishop, (0, 0), (7, 7));
        assert!(BishopRule.validate(movement, &Board::empty()));
        for step in 1..=6 {
            assert!(!BishopRule.validate(movement, &with_blockers(&[(step, step)])));
        }
    }
    #[test]
    fn bishop_traces_the_anti_diagonal() {
        let movement = request(Color::White, PieceKind::Bishop, (7, 0), (0, 7));
        assert!(BishopRule.validate(movement, &Board::empty()));
        assert!(!BishopRule.validate(movement, &with_blockers(&[(3, 4)])));
        assert!(BishopRule.validate(movement, &with_blockers(&[(4, 4)])));
    }
    #[test]
    fn bishop_rejects_unequal_magnitudes_and_degenerate_moves() {
        let board = Board::empty();
        assert!(!BishopRule.validate(
            request(Color::White, PieceKind::Bishop, (0, 0), (1, 2)),
            &board
        ));
        assert!(!BishopRule.validate(
            request(Color::White, PieceKind::Bishop, (0, 0), (0, 3)),
            &board
        ));
        assert!(!BishopRule.validate(
            request(Color::White, PieceKind::Bishop, (4, 4), (4, 4)),
            &board
        ));
    }
    #[test]
    fn queen_is_rook_or_bishop() {
        let board = Board::empty();
        let queen = |destination| request(Color::White, PieceKind::Queen, (3, 3), destination);
        assert!(QueenRule::default().validate(queen((3, 7)), &board));
        assert!(QueenRule::default().validate(queen((6, 6)), &board));
        assert!(QueenRule::default().validate(queen((0, 3)), &board));
        assert!(!QueenRule::default().validate(queen((5, 6)), &board));
        assert!(!QueenRule::default().validate(queen((3, 3)), &board));
    }
    #[test]
    fn queen_is_blocked_like_the_pieces_it_combines() {
        let board = setup("8/8/8/2p5/3Q4/8/8/8");
        let queen = |destination| request(Color::White, PieceKind::Queen, (3, 4), destination);
        assert!(!QueenRule::default().validate(queen((1, 2)), &board));
        assert!(QueenRule::default().validate(queen((2, 3)), &board));
        assert!(QueenRule::default().validate(queen((3, 0)), &board));
    }
}
