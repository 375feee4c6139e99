use tracing::trace;

use crate::{
    board::BoardView,
    config::{DoublePush, EnPassant, RuleConfig},
    coord::{Coord, Vector},
    rules::{MoveRequest, MoveRule},
};

/// Pushes, double pushes from the home rank, diagonal captures and en
/// passant. The direction comes from the pawn's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PawnRule {
    pub double_push: DoublePush,
    pub en_passant: EnPassant,
}
impl PawnRule {
    pub fn new(config: RuleConfig) -> Self {
        PawnRule {
            double_push: config.double_push,
            en_passant: config.en_passant,
        }
    }
    fn double_push(self, request: MoveRequest, board: &dyn BoardView) -> bool {
        let color = request.piece.color();
        if request.origin.y() != color.pawn_home_rank() || board.is_occupied(request.destination) {
            return false;
        }
        match self.double_push {
            DoublePush::Strict => request
                .origin
                .move_by(Vector {
                    x: 0,
                    y: request.piece.direction(),
                })
                .is_some_and(|passed| !board.is_occupied(passed)),
            DoublePush::Permissive => true,
        }
    }
    fn en_passant(self, request: MoveRequest, board: &dyn BoardView) -> bool {
        let color = request.piece.color();
        if request.origin.y() != color.en_passant_rank() {
            return false;
        }
        let passed = Coord::new(request.destination.x(), request.origin.y());
        let Some(victim) = board.occupant_at(passed) else {
            return false;
        };
        match self.en_passant {
            EnPassant::Positional => true,
            EnPassant::LastMove => {
                let legal = board.last_move().is_some_and(|last_move| {
                    last_move.piece == victim
                        && victim.color() != color
                        && last_move.destination == passed
                        && last_move.is_pawn_double_push()
                });
                if !legal {
                    trace!(%passed, "en passant needs a pawn that double pushed just now");
                }
                legal
            }
        }
    }
}
impl MoveRule for PawnRule {
    fn validate(&self, request: MoveRequest, board: &dyn BoardView) -> bool {
        let movement = request.movement();
        let direction = request.piece.direction();
        match movement.x.unsigned_abs() {
            0 if movement.y == direction => !board.is_occupied(request.destination),
            0 if movement.y == 2 * direction => self.double_push(request, board),
            1 if movement.y == direction => {
                board.is_occupied(request.destination) || self.en_passant(request, board)
            }
            _ => false,
        }
    }
}
