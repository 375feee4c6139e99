use tracing::debug;

use crate::{
    board::{Board, BoardView},
    color::Color,
    coord::Coord,
    error::ValidationError,
    piece::ColoredPieceKind,
    registry::Registry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Played {
    Moved { captured: Option<ColoredPieceKind> },
    Rejected,
}

/// The caller side of validation: owns the board and applies what the rules
/// accept. Any side may move at any time.
#[derive(Debug)]
pub struct Game {
    pub board: Board,
    registry: Registry,
}
impl Game {
    pub fn new(board: Board, registry: Registry) -> Self {
        Game { board, registry }
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    /// Whether the move would capture a piece of `color`. En passant targets
    /// the passed square instead of `destination`.
    fn is_friendly_fire(&self, color: Color, origin: Coord, destination: Coord) -> bool {
        self.board
            .occupant_at(self.board.capture_square(origin, destination))
            .is_some_and(|target| target.color() == color)
    }
    /// Squares the piece on `origin` may move to, friendly captures excluded.
    pub fn destinations(&self, origin: Coord) -> impl Iterator<Item = Coord> + '_ {
        let color = self.board.occupant_at(origin).map(ColoredPieceKind::color);
        self.registry
            .destinations(origin, &self.board)
            .filter(move |destination| {
                color.is_some_and(|color| !self.is_friendly_fire(color, origin, *destination))
            })
    }
    pub fn play(&mut self, origin: Coord, destination: Coord) -> Result<Played, ValidationError> {
        let piece = self
            .board
            .occupant_at(origin)
            .ok_or(ValidationError::EmptySquare(origin))?;
        let legal = self.registry.validate_move(
            piece.piece(),
            piece.color(),
            origin,
            destination,
            &self.board,
        )?;
        let friendly_fire = self.is_friendly_fire(piece.color(), origin, destination);
        if !legal || friendly_fire {
            debug!(%piece, %origin, %destination, friendly_fire, "move rejected");
            return Ok(Played::Rejected);
        }
        let captured = self.board.move_piece(origin, destination);
        debug!(%piece, %origin, %destination, ?captured, "move applied");
        Ok(Played::Moved { captured })
    }
}
impl Default for Game {
    fn default() -> Self {
        Game::new(Board::starting_position(), Registry::default())
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::{Board, BoardView},
        color::Color,
        config::RuleConfig,
        coord,
        error::ValidationError,
        fen::Placement,
        game::{Game, Played},
        piece::{ColoredPieceKind, PieceKind},
        registry::Registry,
    };

    fn game(placement: &str) -> Game {
        Game::new(
            placement.parse::<Placement>().unwrap().0,
            Registry::default(),
        )
    }

    #[test]
    fn accepted_move_relocates_the_piece() {
        let mut game = Game::default();
        assert_eq!(
            game.play(coord!("g1"), coord!("f3")),
            Ok(Played::Moved { captured: None })
        );
        assert_eq!(game.board.occupant_at(coord!("g1")), None);
        assert_eq!(
            game.board.occupant_at(coord!("f3")),
            Some(ColoredPieceKind::new(Color::White, PieceKind::Knight))
        );
    }
    #[test]
    fn rejected_move_leaves_the_board_alone() {
        let mut game = Game::default();
        let before = game.board;
        assert_eq!(game.play(coord!("a1"), coord!("a5")), Ok(Played::Rejected));
        assert_eq!(game.play(coord!("e2"), coord!("e5")), Ok(Played::Rejected));
        assert_eq!(game.play(coord!("c1"), coord!("d2")), Ok(Played::Rejected));
        assert_eq!(game.board, before);
    }
    #[test]
    fn malformed_requests_are_errors() {
        let mut game = Game::default();
        assert_eq!(
            game.play(coord!("e4"), coord!("e5")),
            Err(ValidationError::EmptySquare(coord!("e4")))
        );
        assert_eq!(
            game.play(coord!("e2"), coord!("e2")),
            Err(ValidationError::DegenerateMove(coord!("e2")))
        );
    }
    #[test]
    fn capture_removes_the_opponent() {
        let mut game = game("4k3/8/8/3p4/4P3/8/8/4K3");
        assert_eq!(
            game.play(coord!("e4"), coord!("d5")),
            Ok(Played::Moved {
                captured: Some(ColoredPieceKind::new(Color::Black, PieceKind::Pawn))
            })
        );
        assert_eq!(game.board.pieces().count(), 3);
    }
    #[test]
    fn en_passant_sequence() {
        let mut game = Game::default();
        for (origin, destination) in [
            (coord!("e2"), coord!("e4")),
            (coord!("a7"), coord!("a6")),
            (coord!("e4"), coord!("e5")),
            (coord!("d7"), coord!("d5")),
        ] {
            assert!(matches!(
                game.play(origin, destination),
                Ok(Played::Moved { .. })
            ));
        }
        assert_eq!(
            game.play(coord!("e5"), coord!("d6")),
            Ok(Played::Moved {
                captured: Some(ColoredPieceKind::new(Color::Black, PieceKind::Pawn))
            })
        );
        assert_eq!(game.board.occupant_at(coord!("d5")), None);
    }
    #[test]
    fn late_en_passant_is_rejected() {
        let mut game = game("4k3/3p4/8/4P3/8/8/8/4K3");
        game.play(coord!("d7"), coord!("d5")).unwrap();
        game.play(coord!("e1"), coord!("e2")).unwrap();
        assert_eq!(game.play(coord!("e5"), coord!("d6")), Ok(Played::Rejected));
    }
    #[test]
    fn legacy_rules_allow_jumping_pawns() {
        let board: Board = "4k3/8/8/8/8/4n3/4P3/4K3".parse::<Placement>().unwrap().0;
        let mut strict = Game::new(board, Registry::default());
        let mut legacy = Game::new(board, Registry::new(RuleConfig::legacy()));
        assert_eq!(strict.play(coord!("e2"), coord!("e4")), Ok(Played::Rejected));
        assert_eq!(
            legacy.play(coord!("e2"), coord!("e4")),
            Ok(Played::Moved { captured: None })
        );
    }
    #[test]
    fn legacy_en_passant_never_takes_a_friendly_piece() {
        let mut game = Game::new(
            "4k3/8/8/3RP3/8/8/8/4K3".parse::<Placement>().unwrap().0,
            Registry::new(RuleConfig::legacy()),
        );
        assert_eq!(game.destinations(coord!("e5")).count(), 1);
        assert_eq!(game.play(coord!("e5"), coord!("d6")), Ok(Played::Rejected));
        assert_eq!(
            game.board.occupant_at(coord!("d5")),
            Some(ColoredPieceKind::new(Color::White, PieceKind::Rook))
        );
        game.board.place(
            coord!("d5"),
            ColoredPieceKind::new(Color::Black, PieceKind::Rook),
        );
        assert_eq!(
            game.play(coord!("e5"), coord!("d6")),
            Ok(Played::Moved {
                captured: Some(ColoredPieceKind::new(Color::Black, PieceKind::Rook))
            })
        );
    }
    #[test]
    fn destinations_skip_friendly_pieces() {
        let game = Game::default();
        let knight: Vec<_> = game.destinations(coord!("g1")).collect();
        assert_eq!(knight, [coord!("f3"), coord!("h3")]);
        assert_eq!(game.destinations(coord!("a1")).count(), 0);
        assert_eq!(game.destinations(coord!("e4")).count(), 0);
    }
}
