use crate::{
    board::BoardView,
    rules::{MoveRequest, MoveRule},
};

/// Knights jump, occupancy along the way never matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KnightRule;

impl MoveRule for KnightRule {
    fn validate(&self, request: MoveRequest, _: &dyn BoardView) -> bool {
        request.movement().is_knight_move()
    }
}

/// One step in any direction. Whether the destination is attacked is not
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KingRule;

impl MoveRule for KingRule {
    fn validate(&self, request: MoveRequest, _: &dyn BoardView) -> bool {
        request.movement().is_king_move()
    }
}
